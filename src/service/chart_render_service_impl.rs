use crate::common::*;

use crate::enums::chart_type::*;

use crate::model::chart::coordinate_pair::*;
use crate::model::configs::render_api_config::*;

use crate::traits::repository_traits::render_api_repository::*;
use crate::traits::service_traits::chart_render_service::*;

use crate::utils_modules::{io_utils::*, time_utils::*};

/* 색상이 지정되지 않은 경우 적용되는 기본 데이터 색상 */
pub const DEFAULT_CHART_COLOR: &str = "#ff4500";

#[derive(Debug, new)]
pub struct ChartRenderServiceImpl<R: RenderApiRepository> {
    render_api: R,
    render_config: RenderApiConfig,
    image_output_dir: PathBuf,
}

impl<R: RenderApiRepository> ChartRenderServiceImpl<R> {
    #[doc = r#"
        렌더링 API에 보낼 Chart.js 호환 페이로드를 구성하는 함수.

        - line/scatter : 선형 x축 위의 {x, y} 포인트 데이터셋.
          line은 점들을 선으로 잇고 scatter는 점만 표시한다.
        - bar : x 값을 카테고리 라벨로, y 값을 데이터 배열로 사용한다.

        # Arguments
        * `chart_type` - 차트 타입
        * `points` - 데이터 포인트 목록 (line 차트는 이미 정렬된 입력을 기대)
        * `x_label` / `y_label` - 축 라벨
        * `title` - 차트 제목 (빈 문자열 허용)
        * `color` - 데이터 색상
    "#]
    fn build_render_payload(
        &self,
        chart_type: ChartType,
        points: &[CoordinatePair],
        x_label: &str,
        y_label: &str,
        title: &str,
        color: &str,
    ) -> anyhow::Result<Value> {
        let data: Value = match chart_type {
            ChartType::Bar => {
                let labels: Vec<f64> = points.iter().map(|p| p.x).collect();
                let values: Vec<f64> = points.iter().map(|p| p.y).collect();

                json!({
                    "labels": labels,
                    "datasets": [{
                        "label": title,
                        "data": values,
                        "backgroundColor": color
                    }]
                })
            }
            ChartType::Line | ChartType::Scatter => {
                let pairs: Value = convert_json_from_struct(&points)?;

                json!({
                    "datasets": [{
                        "label": title,
                        "data": pairs,
                        "borderColor": color,
                        "backgroundColor": color,
                        "fill": false,
                        "showLine": chart_type == ChartType::Line
                    }]
                })
            }
        };

        let x_axis: Value = match chart_type {
            ChartType::Bar => json!({
                "scaleLabel": { "display": true, "labelString": x_label }
            }),
            ChartType::Line | ChartType::Scatter => json!({
                "type": "linear",
                "position": "bottom",
                "scaleLabel": { "display": true, "labelString": x_label }
            }),
        };

        Ok(json!({
            "chart": {
                "type": chart_type.as_str(),
                "data": data,
                "options": {
                    "title": { "display": !title.is_empty(), "text": title },
                    "legend": { "display": false },
                    "scales": {
                        "xAxes": [x_axis],
                        "yAxes": [{
                            "scaleLabel": { "display": true, "labelString": y_label }
                        }]
                    }
                }
            },
            "width": self.render_config.chart_width(),
            "height": self.render_config.chart_height(),
            "format": "png",
            "backgroundColor": self.render_config.background_color()
        }))
    }
}

#[async_trait]
impl<R: RenderApiRepository> ChartRenderService for ChartRenderServiceImpl<R> {
    #[doc = r#"
        외부 렌더링 API를 호출하여 차트 이미지를 생성하고 파일로 기록하는 함수.

        1. 페이로드를 구성한다 (제목 미지정 시 빈 문자열, 색상 미지정 시 기본 색상)
        2. 렌더링 API에 요청을 보내고 이미지 바이트를 받는다
        3. 설정된 출력 디렉토리에 타임스탬프 파일명으로 기록한다
        4. 기록된 파일 경로를 표시용 핸들로 반환한다

        빈 데이터 검증은 이 함수의 책임이 아니다 — 호출 측 검증 게이트를 통과한
        입력이든 아니든 그대로 API에 위임한다. 실패 시 자동 재시도는 하지 않는다.
    "#]
    async fn generate_chart(
        &self,
        chart_type: ChartType,
        points: &[CoordinatePair],
        x_label: &str,
        y_label: &str,
        title: Option<&str>,
        color: Option<&str>,
    ) -> anyhow::Result<PathBuf> {
        let title: &str = title.unwrap_or("");
        let color: &str = match color {
            Some(color) if !color.trim().is_empty() => color,
            _ => DEFAULT_CHART_COLOR,
        };

        let payload: Value =
            self.build_render_payload(chart_type, points, x_label, y_label, title, color)?;

        let image_bytes: Vec<u8> = self.render_api.render_chart(&payload).await?;

        tokio::fs::create_dir_all(&self.image_output_dir).await?;

        let file_name: String = format!(
            "chart_{}_{}.png",
            chart_type.as_str(),
            get_current_timestamp_for_filename()
        );
        let output_path: PathBuf = self.image_output_dir.join(file_name);

        tokio::fs::write(&output_path, &image_bytes).await?;

        info!("Chart image generated successfully: {:?}", output_path);

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::chart_error::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[derive(Debug, Clone)]
    struct MockRenderApiRepository {
        payloads: Arc<Mutex<Vec<Value>>>,
        response: Result<Vec<u8>, u16>,
    }

    impl MockRenderApiRepository {
        fn succeeding(payloads: Arc<Mutex<Vec<Value>>>) -> Self {
            MockRenderApiRepository {
                payloads,
                response: Ok(vec![0x89, 0x50, 0x4e, 0x47]),
            }
        }

        fn failing(status: u16) -> Self {
            MockRenderApiRepository {
                payloads: Arc::new(Mutex::new(Vec::new())),
                response: Err(status),
            }
        }
    }

    #[async_trait]
    impl RenderApiRepository for MockRenderApiRepository {
        async fn render_chart(&self, payload: &Value) -> anyhow::Result<Vec<u8>> {
            self.payloads.lock().unwrap().push(payload.clone());

            match &self.response {
                Ok(bytes) => Ok(bytes.clone()),
                Err(status) => Err(ChartError::RenderingFailure { status: *status }.into()),
            }
        }
    }

    fn render_config() -> RenderApiConfig {
        RenderApiConfig::new(
            String::from("http://localhost:9999/chart"),
            5,
            500,
            300,
            String::from("white"),
        )
    }

    fn points() -> Vec<CoordinatePair> {
        vec![
            CoordinatePair::new(1.0, 1.0),
            CoordinatePair::new(2.0, 2.0),
            CoordinatePair::new(3.0, 3.0),
        ]
    }

    #[tokio::test]
    async fn generates_an_image_file_on_success() {
        let dir: TempDir = TempDir::new().unwrap();
        let payloads: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
        let service = ChartRenderServiceImpl::new(
            MockRenderApiRepository::succeeding(payloads.clone()),
            render_config(),
            dir.path().to_path_buf(),
        );

        let path: PathBuf = service
            .generate_chart(
                ChartType::Line,
                &points(),
                "x-label",
                "y-label",
                Some("Line Chart"),
                Some("blue"),
            )
            .await
            .unwrap();

        assert!(path.exists());
        assert_eq!(path.extension().unwrap(), "png");
        assert_eq!(fs::read(&path).unwrap(), vec![0x89, 0x50, 0x4e, 0x47]);
    }

    #[tokio::test]
    async fn line_payload_carries_xy_points_and_chart_type() {
        let dir: TempDir = TempDir::new().unwrap();
        let payloads: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
        let service = ChartRenderServiceImpl::new(
            MockRenderApiRepository::succeeding(payloads.clone()),
            render_config(),
            dir.path().to_path_buf(),
        );

        service
            .generate_chart(ChartType::Line, &points(), "x", "y", None, Some("blue"))
            .await
            .unwrap();

        let payload: Value = payloads.lock().unwrap()[0].clone();
        assert_eq!(payload["chart"]["type"], json!("line"));
        assert_eq!(
            payload["chart"]["data"]["datasets"][0]["data"][0],
            json!({ "x": 1.0, "y": 1.0 })
        );
        assert_eq!(
            payload["chart"]["data"]["datasets"][0]["showLine"],
            json!(true)
        );
        assert_eq!(
            payload["chart"]["options"]["scales"]["xAxes"][0]["scaleLabel"]["labelString"],
            json!("x")
        );
        assert_eq!(payload["format"], json!("png"));
    }

    #[tokio::test]
    async fn bar_payload_uses_x_values_as_category_labels() {
        let dir: TempDir = TempDir::new().unwrap();
        let payloads: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
        let service = ChartRenderServiceImpl::new(
            MockRenderApiRepository::succeeding(payloads.clone()),
            render_config(),
            dir.path().to_path_buf(),
        );

        service
            .generate_chart(ChartType::Bar, &points(), "x", "y", Some("Bar Chart"), None)
            .await
            .unwrap();

        let payload: Value = payloads.lock().unwrap()[0].clone();
        assert_eq!(payload["chart"]["type"], json!("bar"));
        assert_eq!(payload["chart"]["data"]["labels"], json!([1.0, 2.0, 3.0]));
        assert_eq!(
            payload["chart"]["data"]["datasets"][0]["data"],
            json!([1.0, 2.0, 3.0])
        );
    }

    #[tokio::test]
    async fn missing_color_falls_back_to_the_default() {
        let dir: TempDir = TempDir::new().unwrap();
        let payloads: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
        let service = ChartRenderServiceImpl::new(
            MockRenderApiRepository::succeeding(payloads.clone()),
            render_config(),
            dir.path().to_path_buf(),
        );

        service
            .generate_chart(ChartType::Scatter, &points(), "x", "y", None, None)
            .await
            .unwrap();

        let payload: Value = payloads.lock().unwrap()[0].clone();
        assert_eq!(
            payload["chart"]["data"]["datasets"][0]["borderColor"],
            json!(DEFAULT_CHART_COLOR)
        );
        assert_eq!(payload["chart"]["options"]["title"]["display"], json!(false));
    }

    #[tokio::test]
    async fn failing_render_api_surfaces_a_rendering_failure() {
        let dir: TempDir = TempDir::new().unwrap();
        let service = ChartRenderServiceImpl::new(
            MockRenderApiRepository::failing(500),
            render_config(),
            dir.path().to_path_buf(),
        );

        let result: anyhow::Result<PathBuf> = service
            .generate_chart(ChartType::Line, &points(), "x", "y", None, None)
            .await;

        let error: anyhow::Error = result.unwrap_err();
        assert_eq!(
            error.downcast_ref::<ChartError>(),
            Some(&ChartError::RenderingFailure { status: 500 })
        );
    }
}
