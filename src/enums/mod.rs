pub mod chart_error;
pub mod chart_type;
