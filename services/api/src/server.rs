use crate::cli::ServeArgs;
use crate::infra::{load_library, AppState, InMemoryCaseRepository};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use codda::config::AppConfig;
use codda::error::AppError;
use codda::telemetry;
use codda::workspace::CaseWorkspaceService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let library = Arc::new(load_library(&config.drafting)?);
    info!(
        templates = library.len(),
        min_section_chars = config.drafting.scoring.min_section_chars,
        "decision language library loaded"
    );
    let repository = Arc::new(InMemoryCaseRepository::default());
    let workspace = Arc::new(CaseWorkspaceService::new(
        repository,
        library,
        config.drafting.scoring.clone(),
    ));

    let app = with_service_routes(workspace)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "discharge drafting service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
