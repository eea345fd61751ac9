//! Synthetic event generation.
//!
//! Every call produces one [`Event`] per entry in [`EVENT_TEMPLATES`]. The
//! template fixes title, description and category; region, source, severity
//! and timestamp are drawn independently for each event. Nothing is cached
//! between calls, so two batches never share assignments or ids.

mod templates;

pub use templates::{EVENT_TEMPLATES, EventTemplate};

use kanau::processor::Processor;
use rand::Rng;
use thiserror::Error;
use time::{Duration, OffsetDateTime};
use tracing::debug;
use wevt_sdk::objects::Event;

/// Width of the window preceding generation time that timestamps fall in.
pub const GENERATION_WINDOW: Duration = Duration::hours(6);

const GENERATION_WINDOW_MILLIS: i64 = GENERATION_WINDOW.whole_milliseconds() as i64;

/// Errors that can occur while generating a batch.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// `now` minus a random offset fell outside the representable range.
    #[error("event timestamp out of range for generation time {now}")]
    TimestampOutOfRange { now: OffsetDateTime },
}

/// Drop sub-millisecond digits so timestamps serialize with at most three
/// fractional digits.
pub fn truncate_to_millis(at: OffsetDateTime) -> Result<OffsetDateTime, GenerationError> {
    at.replace_nanosecond(u32::from(at.millisecond()) * 1_000_000)
        .map_err(|_| GenerationError::TimestampOutOfRange { now: at })
}

/// Generate one batch of events as of `now`, sorted most recent first.
///
/// `now` is truncated to whole milliseconds first. Ties keep template order.
pub fn generate_events<R: Rng + ?Sized>(
    rng: &mut R,
    now: OffsetDateTime,
) -> Result<Vec<Event>, GenerationError> {
    let now = truncate_to_millis(now)?;
    let batch_millis = now.unix_timestamp_nanos() / 1_000_000;

    let mut events = EVENT_TEMPLATES
        .iter()
        .enumerate()
        .map(|(index, template)| -> Result<Event, GenerationError> {
            let offset = Duration::milliseconds(rng.random_range(0..GENERATION_WINDOW_MILLIS));
            let timestamp = now
                .checked_sub(offset)
                .ok_or(GenerationError::TimestampOutOfRange { now })?;

            Ok(Event {
                id: format!("event-{batch_millis}-{index}"),
                title: template.title.to_string(),
                description: template.description.to_string(),
                category: template.category,
                region: rng.random(),
                timestamp,
                source: rng.random(),
                severity: rng.random(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(events)
}

/// Request for a freshly generated batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListEvents;

/// Output of [`ListEvents`].
#[derive(Debug, Clone)]
pub struct EventBatch {
    pub events: Vec<Event>,
    pub generated_at: OffsetDateTime,
}

/// The mock event source.
///
/// Stateless: uses the wall clock and the thread-local RNG on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventSource;

impl EventSource {
    pub fn new() -> Self {
        Self
    }
}

impl Processor<ListEvents> for EventSource {
    type Output = EventBatch;
    type Error = GenerationError;

    #[tracing::instrument(skip_all, err, name = "GenerateEvents")]
    async fn process(&self, _request: ListEvents) -> Result<EventBatch, GenerationError> {
        let generated_at = truncate_to_millis(OffsetDateTime::now_utc())?;
        let events = generate_events(&mut rand::rng(), generated_at)?;
        debug!(count = events.len(), %generated_at, "Generated event batch");
        Ok(EventBatch {
            events,
            generated_at,
        })
    }
}
