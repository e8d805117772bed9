use crate::common::*;

use crate::model::chart::coordinate_pair::*;

#[doc = r#"
    하나의 차트에 대한 전체 명세. 렌더링된 이미지와는 독립적인 영속 형태이다.

    저장소에는 camelCase 키의 JSON으로 기록된다
    (`xLabel`/`yLabel`/`xValues`/`yValues`). 모든 필드가 default 가능하므로
    JSON `{}`는 빈 명세로 역직렬화된다 — 저장된 차트가 없을 때 호출자에게
    돌려주는 "안전한 빈 값" 계약이 이 성질에 의존한다.

    좌표는 x/y 두 개의 병렬 배열로 저장되며, 짝짓기는 인덱스 기준이다.
"#]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters, Setters, new)]
#[getset(get = "pub", set = "pub")]
#[serde(rename_all = "camelCase", default)]
pub struct ChartSpec {
    pub title: String,
    pub color: String,
    pub x_label: String,
    pub y_label: String,
    pub x_values: Vec<f64>,
    pub y_values: Vec<f64>,
}

impl ChartSpec {
    #[doc = "좌표 목록을 병렬 배열로 분해하여 명세를 구성하는 함수. 두 배열의 길이는 항상 같아진다."]
    pub fn from_points(
        title: &str,
        color: &str,
        x_label: &str,
        y_label: &str,
        points: &[CoordinatePair],
    ) -> Self {
        ChartSpec::new(
            title.to_string(),
            color.to_string(),
            x_label.to_string(),
            y_label.to_string(),
            points.iter().map(|p| p.x).collect(),
            points.iter().map(|p| p.y).collect(),
        )
    }

    #[doc = r#"
        병렬 배열을 좌표 목록으로 다시 짝지어주는 함수.

        # Returns
        * `Result<Vec<CoordinatePair>, anyhow::Error>` - 두 배열의 길이가 다르면 오류
    "#]
    pub fn points(&self) -> anyhow::Result<Vec<CoordinatePair>> {
        if self.x_values.len() != self.y_values.len() {
            return Err(anyhow!(
                "[ChartSpec->points] X values and Y values must have the same length: {} vs {}",
                self.x_values.len(),
                self.y_values.len()
            ));
        }

        Ok(self
            .x_values
            .iter()
            .zip(self.y_values.iter())
            .map(|(&x, &y)| CoordinatePair::new(x, y))
            .collect())
    }

    #[doc = "명세가 담고 있는 좌표 쌍의 개수"]
    pub fn point_count(&self) -> usize {
        self.x_values.len().min(self.y_values.len())
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        *self == ChartSpec::default()
    }
}
