pub mod event;
pub mod response;

pub use event::{Category, Event, NewsSource, Region, Severity, UnknownCategory};
pub use response::{ErrorResponse, EventsResponse, FETCH_FAILED_MESSAGE};
