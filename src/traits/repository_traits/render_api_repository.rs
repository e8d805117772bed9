use crate::common::*;

#[async_trait]
pub trait RenderApiRepository: Send + Sync {
    #[doc = "
        Send a chart payload to the external rendering API and return the image bytes
        # Arguments
        * `payload` - Chart.js compatible render request body
    "]
    async fn render_chart(&self, payload: &Value) -> anyhow::Result<Vec<u8>>;
}
