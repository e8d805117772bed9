pub mod chart;
pub mod configs;
