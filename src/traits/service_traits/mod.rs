pub mod chart_render_service;
pub mod chart_store_service;
