use crate::common::*;

use crate::enums::chart_error::*;

use crate::model::chart::chart_spec::*;

#[doc = r#"
    차트 생성 전에 입력 데이터가 완전한지 판정하는 순수 함수.

    1. 좌표 쌍이 하나도 없으면 `NoDataSpecified`
    2. 좌표는 있으나 축 라벨이 하나라도 비어있으면 `MissingAxisLabel`
    3. 그 외에는 Ok

    "데이터 없음" 검사가 라벨 검사보다 항상 우선한다.

    # Arguments
    * `spec` - 검증할 차트 명세

    # Returns
    * `Result<(), ChartError>` - 생성 가능하면 Ok, 아니면 해당 검증 오류
"#]
pub fn validate_chart_data(spec: &ChartSpec) -> Result<(), ChartError> {
    if spec.point_count() == 0 {
        return Err(ChartError::NoDataSpecified);
    }

    if spec.x_label().trim().is_empty() || spec.y_label().trim().is_empty() {
        return Err(ChartError::MissingAxisLabel);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spec_with(x_label: &str, y_label: &str, point_count: usize) -> ChartSpec {
        ChartSpec::new(
            String::from("title"),
            String::new(),
            x_label.to_string(),
            y_label.to_string(),
            (0..point_count).map(|i| i as f64).collect(),
            (0..point_count).map(|i| i as f64).collect(),
        )
    }

    #[test]
    fn no_data_takes_precedence_over_missing_labels() {
        let spec: ChartSpec = spec_with("", "", 0);

        assert_eq!(validate_chart_data(&spec), Err(ChartError::NoDataSpecified));
    }

    #[test]
    fn missing_labels_reported_once_data_exists() {
        assert_eq!(
            validate_chart_data(&spec_with("", "", 1)),
            Err(ChartError::MissingAxisLabel)
        );
        assert_eq!(
            validate_chart_data(&spec_with("Cats", "", 1)),
            Err(ChartError::MissingAxisLabel)
        );
        assert_eq!(
            validate_chart_data(&spec_with("", "Dogs", 1)),
            Err(ChartError::MissingAxisLabel)
        );
    }

    #[test]
    fn complete_spec_passes_validation() {
        assert_eq!(validate_chart_data(&spec_with("Cats", "Dogs", 5)), Ok(()));
    }
}
