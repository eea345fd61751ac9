//! Application state shared across all request handlers.

use wevt_core::generator::EventSource;

/// Application state that is shared across all request handlers.
///
/// The event source is stateless, so this is trivially cheap to clone.
#[derive(Clone, Default)]
pub struct AppState {
    pub events: EventSource,
}

impl AppState {
    pub fn new(events: EventSource) -> Self {
        Self { events }
    }
}
