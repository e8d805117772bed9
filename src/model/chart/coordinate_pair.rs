use crate::common::*;

use crate::enums::chart_error::*;

#[doc = "하나의 (x, y) 데이터 포인트. 값 객체이며 자유롭게 복사 가능하다."]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, new)]
pub struct CoordinatePair {
    pub x: f64,
    pub y: f64,
}

impl CoordinatePair {
    #[doc = r#"
        폼 입력 문자열 한 쌍을 좌표로 파싱하는 함수.

        동적 폼 값은 문자열로 넘어오므로 숫자 비교에 들어가기 전에 이 경계에서
        파싱한다. 숫자로 해석되지 않는 값은 `InvalidCoordinate` 오류로 즉시 실패한다.

        # Arguments
        * `x_raw` - X 입력 필드의 원본 문자열
        * `y_raw` - Y 입력 필드의 원본 문자열

        # Returns
        * `Result<CoordinatePair, ChartError>` - 파싱된 좌표 또는 오류
    "#]
    pub fn parse(x_raw: &str, y_raw: &str) -> Result<Self, ChartError> {
        let x: f64 = parse_coordinate_value(x_raw)?;
        let y: f64 = parse_coordinate_value(y_raw)?;

        Ok(CoordinatePair::new(x, y))
    }
}

fn parse_coordinate_value(raw: &str) -> Result<f64, ChartError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ChartError::InvalidCoordinate {
            value: raw.to_string(),
        })
}

#[doc = r#"
    폼의 X/Y 입력 컬럼 두 개를 위치 기준으로 짝지어 좌표 목록으로 수집하는 함수.

    1. 두 컬럼을 같은 인덱스끼리 짝짓는다
    2. 양쪽 셀이 모두 비어있는 행(빈 그리드 행)은 건너뛴다
    3. 한쪽만 채워졌거나 숫자로 파싱되지 않는 행은 `InvalidCoordinate` 오류

    # Arguments
    * `x_raw` - X 입력 컬럼의 원본 문자열 목록
    * `y_raw` - Y 입력 컬럼의 원본 문자열 목록

    # Returns
    * `Result<Vec<CoordinatePair>, ChartError>` - 수집된 좌표 목록 또는 오류
"#]
#[allow(dead_code)]
pub fn collect_points(x_raw: &[String], y_raw: &[String]) -> Result<Vec<CoordinatePair>, ChartError> {
    let mut points: Vec<CoordinatePair> = Vec::new();

    for (x, y) in x_raw.iter().zip(y_raw.iter()) {
        if x.trim().is_empty() && y.trim().is_empty() {
            continue;
        }

        points.push(CoordinatePair::parse(x, y)?);
    }

    Ok(points)
}

#[doc = r#"
    좌표 목록을 x 오름차순으로 정렬한 새 목록을 반환하는 함수.

    입력은 변경하지 않으며, x가 같은 좌표끼리는 입력 순서를 유지한다(stable).
    빈 목록은 빈 목록을, 원소가 하나인 목록은 그대로 반환한다.

    # Arguments
    * `points` - 정렬할 좌표 목록

    # Returns
    * `Vec<CoordinatePair>` - x 오름차순으로 정렬된 새 목록
"#]
pub fn sort_points(points: &[CoordinatePair]) -> Vec<CoordinatePair> {
    let mut sorted: Vec<CoordinatePair> = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
    sorted
}
