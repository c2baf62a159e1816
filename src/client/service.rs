//! HTTP client for the events service

use anyhow::{Error, Result};
use async_trait::async_trait;

use crate::api::public::events::{Event, EventAttrs, EventPatch};

/// The service surface the calendar session drives. Failures are
/// generic; callers get no structured error codes to act on.
#[async_trait]
pub trait EventService {
    async fn list_events(&self) -> Result<Vec<Event>, Error>;
    async fn create_event(&self, attrs: &EventAttrs) -> Result<Event, Error>;
    async fn update_event(&self, id: &str, patch: &EventPatch) -> Result<Event, Error>;
    async fn delete_event(&self, id: &str) -> Result<(), Error>;
}

pub struct HttpEventService {
    api_base_url: String,
    client: reqwest::Client,
}

impl HttpEventService {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn events_url(&self) -> String {
        format!("{}/api/events", self.api_base_url)
    }
}

#[async_trait]
impl EventService for HttpEventService {
    async fn list_events(&self) -> Result<Vec<Event>, Error> {
        let resp = self
            .client
            .get(self.events_url())
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }

    async fn create_event(&self, attrs: &EventAttrs) -> Result<Event, Error> {
        let resp = self
            .client
            .post(self.events_url())
            .json(attrs)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }

    async fn update_event(&self, id: &str, patch: &EventPatch) -> Result<Event, Error> {
        let resp = self
            .client
            .put(format!("{}/{}", self.events_url(), id))
            .json(patch)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }

    async fn delete_event(&self, id: &str) -> Result<(), Error> {
        self.client
            .delete(format!("{}/{}", self.events_url(), id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
