pub mod chart_spec;
pub mod coordinate_pair;
