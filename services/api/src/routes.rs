use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use study_advisor::advisor::{advisor_router, AdvisorService, StateExtractor};

pub(crate) fn with_advisor_routes<E>(service: Arc<AdvisorService<E>>) -> axum::Router
where
    E: StateExtractor + 'static,
{
    advisor_router(service)
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
    use crate::infra::ApiExtractor;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::util::ServiceExt;

    fn test_router() -> axum::Router {
        let service = Arc::new(AdvisorService::new(Arc::new(ApiExtractor::Disabled)));
        with_advisor_routes(service)
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn structured_endpoint_serves_recommendations() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/recommendations")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"sleep_hours": 3.0, "current_time": 10}"#))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert!(body["recommendations"]
            .as_array()
            .expect("list present")
            .iter()
            .any(|rec| rec["rule_fired"] == "R1_CRITICAL_SLEEP_DEFICIT"));
    }

    #[tokio::test]
    async fn text_endpoint_reports_disabled_extraction() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/recommendations/text")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"message": "feeling tired"}"#))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert!(body["error"]
            .as_str()
            .expect("error message")
            .contains("not configured"));
    }
}
