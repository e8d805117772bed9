use crate::common::*;

use crate::model::chart::chart_spec::*;

use crate::traits::repository_traits::keyvalue_repository::*;
use crate::traits::service_traits::chart_store_service::*;

pub const SAVED_CHARTS_KEY: &str = "savedCharts";
pub const CURRENT_CHART_DATA_KEY: &str = "currentChartData";

#[derive(Debug, new)]
pub struct ChartStoreServiceImpl<K: KeyValueRepository> {
    storage: K,
}

impl<K: KeyValueRepository> ChartStoreServiceImpl<K> {
    #[doc = r#"
        저장소 엔트리를 읽어 역직렬화하는 공통 함수.

        값이 없거나 기대한 구조로 파싱되지 않는 경우를 동일하게 취급하여
        기본값으로 degrade 한다. 이 저장소는 best-effort 클라이언트 상태이므로
        읽기 실패는 절대 오류로 전파하지 않는다.
    "#]
    fn read_json_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.storage.get_item(key) {
            Some(raw) => match serde_json::from_str::<T>(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!(
                        "[ChartStoreServiceImpl->read_json_or_default] '{}' entry is unparseable, treating it as empty: {:?}",
                        key, e
                    );
                    T::default()
                }
            },
            None => T::default(),
        }
    }
}

impl<K: KeyValueRepository> ChartStoreService for ChartStoreServiceImpl<K> {
    #[doc = "저장된 차트 목록 끝에 명세를 추가하는 함수. 목록 전체를 읽고 다시 쓴다."]
    fn save_chart(&self, spec: &ChartSpec) -> anyhow::Result<()> {
        let mut saved_charts: Vec<ChartSpec> = self.read_json_or_default(SAVED_CHARTS_KEY);
        saved_charts.push(spec.clone());

        let serialized: String = serde_json::to_string(&saved_charts)?;
        self.storage.set_item(SAVED_CHARTS_KEY, &serialized)
    }

    fn load_all_saved_charts(&self) -> Vec<ChartSpec> {
        self.read_json_or_default(SAVED_CHARTS_KEY)
    }

    #[doc = "인덱스로 저장된 차트를 조회하는 함수. 범위를 벗어나면 오류 대신 빈 명세를 돌려준다."]
    fn load_saved_chart(&self, index: usize) -> ChartSpec {
        self.load_all_saved_charts()
            .into_iter()
            .nth(index)
            .unwrap_or_default()
    }

    #[doc = "현재 초안 엔트리를 통째로 덮어쓰는 함수. 병합 의미는 없다."]
    fn update_current_chart_data(&self, spec: &ChartSpec) -> anyhow::Result<()> {
        let serialized: String = serde_json::to_string(spec)?;
        self.storage.set_item(CURRENT_CHART_DATA_KEY, &serialized)
    }

    fn load_current_chart_data(&self) -> ChartSpec {
        self.read_json_or_default(CURRENT_CHART_DATA_KEY)
    }
}
