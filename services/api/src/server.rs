use crate::cli::ServeArgs;
use crate::infra::{ApiExtractor, AppState};
use crate::routes::with_advisor_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use study_advisor::advisor::AdvisorService;
use study_advisor::config::AppConfig;
use study_advisor::error::AppError;
use study_advisor::telemetry;
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

    let extractor = Arc::new(ApiExtractor::from_config(&config.extraction)?);
    let advisor_service = Arc::new(AdvisorService::new(extractor));

    let app = with_advisor_routes(advisor_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "study advisor service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
