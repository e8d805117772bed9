use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct SystemConfig {
    pub storage_file_path: String,
    pub image_output_dir: String,
}
