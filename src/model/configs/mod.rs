pub mod render_api_config;
pub mod system_config;
pub mod total_config;
