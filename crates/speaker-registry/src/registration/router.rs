use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::Speaker;
use super::evaluation::RegistrationError;
use super::repository::{RepositoryError, SpeakerRepository};
use super::service::SpeakerRegistrationService;

/// Router builder exposing the speaker registration endpoint.
pub fn registration_router<R>(service: Arc<SpeakerRegistrationService<R>>) -> Router
where
    R: SpeakerRepository + 'static,
{
    Router::new()
        .route("/api/v1/speakers", post(register_handler::<R>))
        .with_state(service)
}

pub(crate) async fn register_handler<R>(
    State(service): State<Arc<SpeakerRegistrationService<R>>>,
    axum::Json(speaker): axum::Json<Speaker>,
) -> Response
where
    R: SpeakerRepository + 'static,
{
    match service.register(speaker) {
        Ok(view) => (StatusCode::CREATED, axum::Json(view)).into_response(),
        Err(error) if error.is_rejection() => {
            let mut payload = json!({
                "error": error.to_string(),
                "kind": error.kind(),
            });
            if let RegistrationError::MissingRequiredField(field) = &error {
                payload["field"] = json!(field.label());
            }
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(RegistrationError::Storage(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "speaker already registered",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
