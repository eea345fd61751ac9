//! Response envelopes for `GET /api/events`.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::event::Event;

/// Message carried by [`ErrorResponse`] when event generation fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch events";

/// Successful `GET /api/events` body.
///
/// ```json
/// {"success":true,"events":[ ... ],"timestamp":"2024-05-01T12:00:00Z","count":15}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsResponse {
    pub success: bool,
    pub events: Vec<Event>,
    /// When the batch was generated.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Always equal to `events.len()`.
    pub count: usize,
}

impl EventsResponse {
    pub fn new(events: Vec<Event>, timestamp: OffsetDateTime) -> Self {
        Self {
            success: true,
            count: events.len(),
            events,
            timestamp,
        }
    }
}

/// Body returned with a `500 Internal Server Error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }

    pub fn fetch_failed() -> Self {
        Self::new(FETCH_FAILED_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_tracks_events() {
        let response = EventsResponse::new(vec![], OffsetDateTime::UNIX_EPOCH);
        assert!(response.success);
        assert_eq!(response.count, 0);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["timestamp"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_error_response_shape() {
        let value = serde_json::to_value(ErrorResponse::fetch_failed()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "success": false, "error": "Failed to fetch events" })
        );
    }
}
