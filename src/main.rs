mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::inference_repository_impl::*;

mod env_configuration;

mod errors;

mod traits;
use traits::repository_traits::inference_repository::*;

mod dto;

mod enums;

mod model;
use model::configs::app_config::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{chart_service_impl::*, export_service_impl::*, generation_service_impl::*};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    set_global_logger();

    info!("Chart generator start!");

    let config: AppConfig = AppConfig::from_env().unwrap_or_else(|e| {
        let err_msg: &str = "[main] An issue occurred while loading the configuration.";
        error!("{} {:?}", err_msg, e);
        panic!("{} {:?}", err_msg, e)
    });

    let inference_repository: InferenceRepositoryImpl =
        InferenceRepositoryImpl::from_config(&config);

    if *config.verbose() {
        match inference_repository.test_connection().await {
            Ok(true) => info!("Inference endpoint reachable: {}", config.api_url()),
            Ok(false) => warn!(
                "Inference endpoint answered but did not acknowledge the probe: {}",
                config.api_url()
            ),
            Err(e) => warn!("Inference endpoint connection test failed: {:?}", e),
        }
    }

    /* 의존 주입 */
    let generation_service: GenerationServiceImpl<InferenceRepositoryImpl> =
        GenerationServiceImpl::new(inference_repository, config.clone());
    let chart_service: ChartServiceImpl = ChartServiceImpl::new();
    let export_service: ExportServiceImpl = ExportServiceImpl::new(config.clone());

    let main_controller: MainController<
        GenerationServiceImpl<InferenceRepositoryImpl>,
        ChartServiceImpl,
        ExportServiceImpl,
    > = MainController::new(generation_service, chart_service, export_service, config);

    main_controller.run().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
