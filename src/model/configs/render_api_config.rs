use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct RenderApiConfig {
    pub base_url: String,
    pub request_timeout_sec: u64,
    pub chart_width: u32,
    pub chart_height: u32,
    pub background_color: String,
}
