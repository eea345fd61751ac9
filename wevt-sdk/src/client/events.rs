//! Events API client (dashboard → events server).

use reqwest::Client;
use url::Url;

use super::ClientError;
use crate::objects::EventsResponse;

/// Path of the event listing endpoint, relative to the server root.
pub const EVENTS_PATH: &str = "/api/events";

/// Typed HTTP client for the events API.
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct EventsClient {
    http: Client,
    base_url: Url,
}

impl EventsClient {
    /// Create a new `EventsClient` pointed at the server root `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn events_url(&self) -> Result<Url, ClientError> {
        Ok(self.base_url.join(EVENTS_PATH)?)
    }

    /// `GET /api/events` – fetch a freshly generated batch of events.
    pub async fn list_events(&self) -> Result<EventsResponse, ClientError> {
        let url = self.events_url()?;
        let resp = self.http.get(url).send().await?;
        parse_response(resp).await
    }
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Api { status, body });
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ClientError::Json)
}
