use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use talentflow::hiring::{hiring_router, SnapshotStore, TalentService};

pub(crate) fn with_hiring_routes<S>(service: Arc<TalentService<S>>) -> axum::Router
where
    S: SnapshotStore + 'static,
{
    hiring_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use talentflow::hiring::{seed, HiringStore, MemoryStore};
    use tower::ServiceExt;

    fn seeded_router() -> axum::Router {
        let store = HiringStore::open(MemoryStore::default()).expect("open store");
        store.import(seed::demo_snapshot()).expect("seed");
        let service = Arc::new(TalentService::with_latency(
            Arc::new(store),
            std::time::Duration::ZERO,
        ));
        with_hiring_routes(service)
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let router = seeded_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024).await.expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload.get("status"), Some(&json!("ok")));
    }

    #[tokio::test]
    async fn hiring_surface_is_mounted() {
        let router = seeded_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/jobs")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload.as_array().map(Vec::len), Some(6));
    }
}
