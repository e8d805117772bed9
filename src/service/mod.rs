pub mod chart_render_service_impl;
pub mod chart_store_service_impl;
