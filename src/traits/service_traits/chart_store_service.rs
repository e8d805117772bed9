use crate::common::*;

use crate::model::chart::chart_spec::*;

#[doc = r#"
    저장된 차트 목록과 현재 초안(draft)에 대한 영속화 계약.

    저장된 차트의 식별자는 목록 내 인덱스이며, 목록은 통째로만 다시 쓰인다.
    모든 읽기 연산은 "없음"과 "파싱 불가"를 동일하게 취급하여 오류 대신
    빈 값으로 degrade 한다.
"#]
pub trait ChartStoreService: Send + Sync {
    fn save_chart(&self, spec: &ChartSpec) -> anyhow::Result<()>;
    fn load_all_saved_charts(&self) -> Vec<ChartSpec>;
    fn load_saved_chart(&self, index: usize) -> ChartSpec;
    fn update_current_chart_data(&self, spec: &ChartSpec) -> anyhow::Result<()>;
    fn load_current_chart_data(&self) -> ChartSpec;
}
