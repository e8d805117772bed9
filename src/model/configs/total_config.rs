use crate::common::*;

use crate::model::configs::{render_api_config::*, system_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_chart_config);

#[doc = "Function to initialize chart-builder configuration information instances"]
pub fn initialize_chart_config() -> TotalConfig {
    info!("initialize_chart_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub system: SystemConfig,
    pub render_api: RenderApiConfig,
}

#[doc = "system 설정 정보"]
pub fn get_system_config_info() -> &'static SystemConfig {
    &TOTAL_CONFIG.system
}

#[doc = "렌더링 API 설정 정보"]
pub fn get_render_api_config_info() -> &'static RenderApiConfig {
    &TOTAL_CONFIG.render_api
}

impl TotalConfig {
    fn new() -> Self {
        match read_toml_from_file::<TotalConfig>(&CHART_CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                let err_msg =
                    "Failed to convert the data from CHART_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}
