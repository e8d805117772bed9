use crate::common::*;

use crate::dto::saved_chart_summary::*;

use crate::enums::chart_type::*;

use crate::model::chart::{chart_spec::*, coordinate_pair::*};

use crate::traits::service_traits::{chart_render_service::*, chart_store_service::*};

use crate::utils_modules::validation_utils::*;

#[derive(Debug, new)]
pub struct ChartController<S: ChartStoreService, R: ChartRenderService> {
    chart_store_service: S,
    chart_render_service: R,
}

impl<S: ChartStoreService, R: ChartRenderService> ChartController<S, R> {
    #[doc = r#"
        현재 초안으로 1회의 헤드리스 빌드를 수행하는 함수.

        1. 저장소에서 현재 초안을 읽어온다
        2. 초안을 검증하고 차트 이미지를 생성한다
        3. 생성에 성공한 초안을 갤러리에 저장한다

        생성 실패 시 초안은 저장소에 그대로 남으므로 사용자가 수동으로 재시도할 수 있다.

        # Returns
        * `anyhow::Result<()>` - 정상 종료 시 Ok(()), 검증/렌더링 실패 시 Err
    "#]
    pub async fn main_task(&self, chart_type: ChartType) -> anyhow::Result<()> {
        let draft: ChartSpec = self.chart_store_service.load_current_chart_data();

        let image_path: PathBuf = self.generate_chart(chart_type, &draft).await?;

        self.save_chart(&draft)?;

        info!(
            "Chart '{}' rendered to {:?} and saved to the gallery",
            draft.title(),
            image_path
        );

        Ok(())
    }

    #[doc = r#"
        차트 명세를 검증하고 렌더링하여 이미지 경로를 반환하는 함수.

        검증은 어떤 비동기 작업보다도 먼저 동기적으로 수행된다. line 차트는
        렌더링 전에 좌표를 x 오름차순으로 정렬하며, scatter/bar는 입력 순서를
        그대로 사용한다. 실패하더라도 저장소의 상태는 변경하지 않는다.

        # Arguments
        * `chart_type` - 생성할 차트 타입
        * `spec` - 렌더링할 차트 명세

        # Returns
        * `anyhow::Result<PathBuf>` - 생성된 이미지 파일 경로
    "#]
    pub async fn generate_chart(
        &self,
        chart_type: ChartType,
        spec: &ChartSpec,
    ) -> anyhow::Result<PathBuf> {
        validate_chart_data(spec)?;

        let points: Vec<CoordinatePair> = spec.points()?;
        let points: Vec<CoordinatePair> = match chart_type {
            ChartType::Line => sort_points(&points),
            ChartType::Scatter | ChartType::Bar => points,
        };

        let title: Option<&str> = match spec.title().is_empty() {
            true => None,
            false => Some(spec.title().as_str()),
        };
        let color: Option<&str> = match spec.color().is_empty() {
            true => None,
            false => Some(spec.color().as_str()),
        };

        self.chart_render_service
            .generate_chart(
                chart_type,
                &points,
                spec.x_label(),
                spec.y_label(),
                title,
                color,
            )
            .await
    }

    #[doc = "명세를 갤러리에 저장하는 함수 (append-only)"]
    pub fn save_chart(&self, spec: &ChartSpec) -> anyhow::Result<()> {
        self.chart_store_service.save_chart(spec)
    }

    #[doc = "갤러리의 차트를 인덱스로 열어 현재 초안으로 불러오는 함수"]
    pub fn open_saved_chart(&self, index: usize) -> anyhow::Result<ChartSpec> {
        let spec: ChartSpec = self.chart_store_service.load_saved_chart(index);
        self.chart_store_service.update_current_chart_data(&spec)?;

        Ok(spec)
    }

    #[doc = "갤러리 목록을 (인덱스, 제목) 요약으로 반환하는 함수"]
    pub fn saved_chart_summaries(&self) -> Vec<SavedChartSummary> {
        self.chart_store_service
            .load_all_saved_charts()
            .into_iter()
            .enumerate()
            .map(|(index, spec)| SavedChartSummary::new(index, spec.title().clone()))
            .collect()
    }

    #[doc = "현재 초안을 통째로 갱신하는 함수. 페이지 전환 간 입력 유지에 사용된다."]
    pub fn update_draft(&self, spec: &ChartSpec) -> anyhow::Result<()> {
        self.chart_store_service.update_current_chart_data(spec)
    }

    pub fn current_draft(&self) -> ChartSpec {
        self.chart_store_service.load_current_chart_data()
    }

    #[doc = "현재 초안을 기본값으로 되돌리는 함수 (clear-to-defaults 동작)"]
    pub fn clear_chart_data(&self) -> anyhow::Result<()> {
        self.chart_store_service
            .update_current_chart_data(&ChartSpec::default())
    }
}
