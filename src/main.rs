/*
Author      : Seunghwan Shin
Create date : 2026-03-00
Description :

History     : 2026-03-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::{file_storage_repository_impl::*, render_api_repository_impl::*};

mod env_configuration;
use env_configuration::env_config::*;

mod traits;

mod dto;

mod enums;
use enums::chart_type::*;

mod model;
use model::configs::total_config::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{chart_render_service_impl::*, chart_store_service_impl::*};

mod controller;
use controller::chart_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    set_global_logger();

    info!("Chart builder start!");

    /* 로컬 저장소 및 렌더링 API 연결 */
    let storage_repo: FileStorageRepositoryImpl =
        FileStorageRepositoryImpl::new(get_system_config_info().storage_file_path());

    let render_api_repo: RenderApiRepositoryImpl =
        RenderApiRepositoryImpl::new(get_render_api_config_info()).unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing render_api_repo.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    /* 의존 주입 */
    let chart_store_service: ChartStoreServiceImpl<FileStorageRepositoryImpl> =
        ChartStoreServiceImpl::new(storage_repo);

    let chart_render_service: ChartRenderServiceImpl<RenderApiRepositoryImpl> =
        ChartRenderServiceImpl::new(
            render_api_repo,
            get_render_api_config_info().clone(),
            PathBuf::from(get_system_config_info().image_output_dir()),
        );

    let chart_controller: ChartController<
        ChartStoreServiceImpl<FileStorageRepositoryImpl>,
        ChartRenderServiceImpl<RenderApiRepositoryImpl>,
    > = ChartController::new(chart_store_service, chart_render_service);

    let chart_type: ChartType = CHART_TYPE.parse::<ChartType>().unwrap_or_else(|e| {
        let err_msg: &str = "[main] An issue occurred while parsing CHART_TYPE.";
        error!("{} {:?}", err_msg, e);
        panic!("{} {:?}", err_msg, e)
    });

    chart_controller.main_task(chart_type).await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
