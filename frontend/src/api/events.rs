use async_trait::async_trait;
use gloo_net::http::Request;
use log::debug;
use shared::catalog::decode_events;
use shared::{Event, FetchError};

use crate::api::api_url;
use crate::config::Config;

/// Anything that can produce the admitted event list.
#[async_trait(?Send)]
pub trait EventSource {
    async fn fetch_events(&self) -> Result<Vec<Event>, FetchError>;
}

/// `GET /api/events` over the browser's fetch API.
#[derive(Debug, Clone, Default)]
pub struct HttpEventSource;

#[async_trait(?Send)]
impl EventSource for HttpEventSource {
    async fn fetch_events(&self) -> Result<Vec<Event>, FetchError> {
        let url = api_url(Config::EVENTS_PATH);
        debug!("Fetching events from {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let events = decode_events(status, &body)?;
        debug!("Successfully loaded {} events", events.len());
        Ok(events)
    }
}
