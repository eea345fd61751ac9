//! Where the dashboard gets its events from.
//!
//! [`EventFeed`] is implemented both for the in-process [`EventSource`] and
//! for the HTTP [`EventsClient`], so the dashboard can run against either.

use crate::generator::{EventSource, GenerationError, ListEvents};
use async_trait::async_trait;
use kanau::processor::Processor;
use thiserror::Error;
use wevt_sdk::client::{ClientError, EventsClient};
use wevt_sdk::objects::Event;

/// Errors surfaced by an [`EventFeed`].
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network failure or non-2xx response.
    #[error("transport failure: {0}")]
    Transport(#[from] ClientError),

    /// The event source failed to generate a batch.
    #[error("generation failure: {0}")]
    Generation(#[from] GenerationError),
}

/// A source of event batches.
#[async_trait]
pub trait EventFeed: Send + Sync {
    /// Fetch the current batch, most recent first.
    async fn fetch_events(&self) -> Result<Vec<Event>, FeedError>;
}

#[async_trait]
impl EventFeed for EventSource {
    async fn fetch_events(&self) -> Result<Vec<Event>, FeedError> {
        Ok(self.process(ListEvents).await?.events)
    }
}

#[async_trait]
impl EventFeed for EventsClient {
    async fn fetch_events(&self) -> Result<Vec<Event>, FeedError> {
        let response = self.list_events().await?;
        tracing::debug!(
            count = response.count,
            generated_at = %response.timestamp,
            "Fetched events from server"
        );
        Ok(response.events)
    }
}
