use crate::common::*;

#[doc = r#"
    차트 빌더 코어의 오류 분류.

    - `NoDataSpecified` / `MissingAxisLabel` : 생성 시도 전에 동기적으로 검출되는 검증 오류.
    - `InvalidCoordinate` : 폼에서 넘어온 좌표 값이 숫자로 파싱되지 않는 경우.
    - `RenderingFailure` : 외부 렌더링 API가 비정상 응답을 반환한 경우.

    검증 오류의 표시 문자열은 사용자에게 그대로 노출되는 알림 문구이다.
"#]
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum ChartError {
    #[error("No data specified!")]
    NoDataSpecified,

    #[error("Must specify a label for both X and Y!")]
    MissingAxisLabel,

    #[error("Invalid coordinate value: '{value}'")]
    InvalidCoordinate { value: String },

    #[error("Chart rendering request failed with status {status}")]
    RenderingFailure { status: u16 },
}
