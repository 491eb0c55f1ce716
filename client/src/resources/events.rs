use crate::client::ApiClient;
use crate::error::Result;
use crate::jsonapi::{NewResource, Resource};
use crate::models::{Event, EventCreate, EventPatch};
use reqwest::Method;

impl ApiClient {
    /// List every event.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn get_events(&self) -> Result<Vec<Event>> {
        self.fetch_many("/v1/events").await
    }

    /// List events that have not started yet.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn get_upcoming_events(&self) -> Result<Vec<Event>> {
        self.fetch_many("/v1/events/upcoming").await
    }

    /// Fetch one event.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn get_event(&self, id: u64) -> Result<Event> {
        self.fetch_one(&format!("/v1/events/{id}")).await
    }

    /// Create an event. Unset state and privacy default to draft and public.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn create_event(&self, data: &EventCreate) -> Result<Event> {
        let body = NewResource::create(Event::TYPE, data.to_attributes()).into_document();
        let event: Event = self.send_one(Method::POST, "/v1/events", &body).await?;
        tracing::info!(event_id = event.id, "Created event");
        Ok(event)
    }

    /// Apply a partial update to an event.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn update_event(&self, id: u64, patch: &EventPatch) -> Result<Event> {
        let body = NewResource::update(Event::TYPE, id, patch.to_attributes()).into_document();
        self.send_one(Method::PATCH, &format!("/v1/events/{id}"), &body).await
    }

    /// Delete an event.
    ///
    /// # Errors
    ///
    /// Fails on transport or API errors.
    pub async fn delete_event(&self, id: u64) -> Result<()> {
        self.delete(&format!("/v1/events/{id}")).await?;
        tracing::info!(event_id = id, "Deleted event");
        Ok(())
    }
}
