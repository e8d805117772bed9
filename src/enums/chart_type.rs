use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Scatter,
    Bar,
}

impl ChartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Scatter => "scatter",
            ChartType::Bar => "bar",
        }
    }
}

impl FromStr for ChartType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(ChartType::Line),
            "scatter" => Ok(ChartType::Scatter),
            "bar" => Ok(ChartType::Bar),
            other => Err(anyhow!("[ChartType->from_str] Unknown chart type: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_all_supported_chart_types() {
        assert_eq!("line".parse::<ChartType>().unwrap(), ChartType::Line);
        assert_eq!("scatter".parse::<ChartType>().unwrap(), ChartType::Scatter);
        assert_eq!("bar".parse::<ChartType>().unwrap(), ChartType::Bar);
    }

    #[test]
    fn rejects_unknown_chart_type() {
        assert!("pie".parse::<ChartType>().is_err());
    }
}
