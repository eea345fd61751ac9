//! HTTP API.
//!
//! # Endpoints
//!
//! - `GET /api/events` – a freshly generated batch of events

mod events;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Build the API router, mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/events", get(events::list_events))
}
