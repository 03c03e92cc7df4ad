use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_hiring_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use talentflow::config::AppConfig;
use talentflow::error::AppError;
use talentflow::hiring::{seed, HiringStore, JsonFileStore, TalentService};
use talentflow::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(data_path) = args.data_path.take() {
        config.store.data_path = data_path;
    }
    if let Some(latency_ms) = args.latency_ms.take() {
        config.store.latency_ms = latency_ms;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let snapshots = JsonFileStore::new(config.store.data_path.clone());
    let store = Arc::new(HiringStore::open(snapshots)?);
    if store.is_empty() {
        store.import(seed::demo_snapshot())?;
        info!(path = %config.store.data_path.display(), "seeded empty store with demo data");
    }

    let service = Arc::new(TalentService::with_latency(store, config.store.latency()));

    let app = with_hiring_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, latency_ms = config.store.latency_ms, "talentflow service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
