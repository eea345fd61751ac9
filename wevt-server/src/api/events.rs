use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use kanau::processor::Processor;
use wevt_core::generator::{GenerationError, ListEvents};
use wevt_sdk::objects::{ErrorResponse, EventsResponse};

use crate::state::AppState;

/// `GET /events`: generate and return a new batch.
///
/// The body is serialized here rather than through `Json` so that a
/// serialization failure still produces the structured error payload.
pub(super) async fn list_events(state: State<AppState>) -> Result<Response, EventsApiError> {
    let batch = state
        .events
        .process(ListEvents)
        .await
        .map_err(EventsApiError::Generation)?;

    let body = EventsResponse::new(batch.events, batch.generated_at);
    let bytes = serde_json::to_vec(&body).map_err(EventsApiError::Serialization)?;

    tracing::debug!(count = body.count, "Served event batch");
    Ok(([(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}

/// Errors that can occur while serving events.
#[derive(Debug)]
pub(super) enum EventsApiError {
    /// The event source failed to produce a batch.
    Generation(GenerationError),
    /// The batch could not be encoded.
    Serialization(serde_json::Error),
}

impl IntoResponse for EventsApiError {
    fn into_response(self) -> Response {
        match &self {
            EventsApiError::Generation(e) => {
                tracing::error!(error = %e, "Event generation failed");
            }
            EventsApiError::Serialization(e) => {
                tracing::error!(error = %e, "Event serialization failed");
            }
        }
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::fetch_failed()),
        )
            .into_response()
    }
}
