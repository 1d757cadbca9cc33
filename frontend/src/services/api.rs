use event_types::{EventRecord, ListEventsResponse};
use gloo_net::http::Request;
use thiserror::Error;

/// Default endpoint for a remote event listing.
pub const API_EVENTS_URL: &str = "/api/events";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

pub struct ApiService;

impl ApiService {
    pub async fn list_events(url: &str) -> Result<Vec<EventRecord>, FetchError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let body: ListEventsResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(body.events)
    }
}
