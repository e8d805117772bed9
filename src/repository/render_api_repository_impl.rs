use crate::common::*;

use crate::enums::chart_error::*;

use crate::model::configs::render_api_config::*;

use crate::traits::repository_traits::render_api_repository::*;

#[derive(Debug, Clone)]
pub struct RenderApiRepositoryImpl {
    client: Client,
    base_url: String,
}

impl RenderApiRepositoryImpl {
    pub fn new(render_config: &RenderApiConfig) -> Result<Self, anyhow::Error> {
        let client: Client = Client::builder()
            .timeout(Duration::from_secs(*render_config.request_timeout_sec()))
            .build()?;

        Ok(RenderApiRepositoryImpl {
            client,
            base_url: render_config.base_url().to_string(),
        })
    }
}

#[async_trait]
impl RenderApiRepository for RenderApiRepositoryImpl {
    #[doc = "Function that posts the render payload to the external chart API"]
    async fn render_chart(&self, payload: &Value) -> anyhow::Result<Vec<u8>> {
        let response: reqwest::Response =
            self.client.post(&self.base_url).json(payload).send().await?;

        let status: reqwest::StatusCode = response.status();

        if status.is_success() {
            let image_bytes: Vec<u8> = response.bytes().await?.to_vec();
            Ok(image_bytes)
        } else {
            error!(
                "[Render API Error][render_chart()] response status is failed: {}",
                status
            );
            Err(ChartError::RenderingFailure {
                status: status.as_u16(),
            }
            .into())
        }
    }
}
