use crate::common::*;

#[doc = "갤러리 목록 한 줄에 해당하는 정보. 인덱스가 곧 저장된 차트의 식별자이다."]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct SavedChartSummary {
    pub index: usize,
    pub title: String,
}
