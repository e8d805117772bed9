use crate::common::*;

use crate::enums::chart_type::*;
use crate::model::chart::coordinate_pair::*;

#[async_trait]
pub trait ChartRenderService: Send + Sync {
    #[doc = "
        Generate a chart image through the external rendering API and save it as a file
        # Arguments
        * `chart_type` - Chart type (line, scatter, bar)
        * `points` - Ordered data points (line charts expect sorted input)
        * `x_label` - Label for X-axis
        * `y_label` - Label for Y-axis
        * `title` - Optional chart title
        * `color` - Optional data color (hex or named)
    "]
    async fn generate_chart(
        &self,
        chart_type: ChartType,
        points: &[CoordinatePair],
        x_label: &str,
        y_label: &str,
        title: Option<&str>,
        color: Option<&str>,
    ) -> anyhow::Result<PathBuf>;
}
