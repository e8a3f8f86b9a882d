use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::export;
use super::extraction::StateExtractor;
use super::input::StateFields;
use super::service::{AdvisorOutcome, AdvisorService, AdvisorServiceError};

/// Router builder exposing the advisory endpoints.
pub fn advisor_router<E>(service: Arc<AdvisorService<E>>) -> Router
where
    E: StateExtractor + 'static,
{
    Router::new()
        .route("/api/v1/recommendations", post(advise_handler::<E>))
        .route(
            "/api/v1/recommendations/text",
            post(advise_text_handler::<E>),
        )
        .route(
            "/api/v1/recommendations/export",
            post(export_handler::<E>),
        )
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub(crate) struct AdviceResponse {
    #[serde(flatten)]
    pub(crate) outcome: AdvisorOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) note: Option<&'static str>,
}

const BALANCED_NOTE: &str =
    "No specific recommendations matched your current state. You seem to be in a balanced condition!";

fn advice_response(outcome: AdvisorOutcome) -> AdviceResponse {
    let note = outcome.is_balanced().then_some(BALANCED_NOTE);
    AdviceResponse { outcome, note }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TextAdviceRequest {
    pub(crate) message: String,
}

pub(crate) async fn advise_handler<E>(
    State(service): State<Arc<AdvisorService<E>>>,
    axum::Json(fields): axum::Json<StateFields>,
) -> Response
where
    E: StateExtractor + 'static,
{
    match service.advise(fields) {
        Ok(outcome) => (StatusCode::OK, axum::Json(advice_response(outcome))).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn advise_text_handler<E>(
    State(service): State<Arc<AdvisorService<E>>>,
    axum::Json(request): axum::Json<TextAdviceRequest>,
) -> Response
where
    E: StateExtractor + 'static,
{
    match service.advise_text(&request.message).await {
        Ok(outcome) => (StatusCode::OK, axum::Json(advice_response(outcome))).into_response(),
        Err(AdvisorServiceError::Extraction(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
        Err(AdvisorServiceError::State(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn export_handler<E>(
    State(service): State<Arc<AdvisorService<E>>>,
    axum::Json(fields): axum::Json<StateFields>,
) -> Response
where
    E: StateExtractor + 'static,
{
    let outcome = match service.advise(fields) {
        Ok(outcome) => outcome,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    match export::to_csv(&outcome.recommendations) {
        Ok(csv) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv")],
            csv,
        )
            .into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
