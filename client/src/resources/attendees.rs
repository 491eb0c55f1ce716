use super::scoped;
use crate::client::ApiClient;
use crate::error::Result;
use crate::jsonapi::{NewResource, Resource};
use crate::models::{Attendee, AttendeePatch};
use reqwest::Method;

impl ApiClient {
    /// List attendees of one event, or all of them.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn get_attendees(&self, event_id: Option<u64>) -> Result<Vec<Attendee>> {
        self.fetch_many(&scoped("attendees", event_id)).await
    }

    /// Fetch one attendee.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn get_attendee(&self, id: u64) -> Result<Attendee> {
        self.fetch_one(&format!("/v1/attendees/{id}")).await
    }

    /// Apply a partial update to an attendee, e.g. a check-in or a review
    /// decision.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn update_attendee(&self, id: u64, patch: &AttendeePatch) -> Result<Attendee> {
        let body = NewResource::update(Attendee::TYPE, id, patch.to_attributes()).into_document();
        self.send_one(Method::PATCH, &format!("/v1/attendees/{id}"), &body).await
    }

    /// Delete an attendee.
    ///
    /// # Errors
    ///
    /// Fails on transport or API errors.
    pub async fn delete_attendee(&self, id: u64) -> Result<()> {
        self.delete(&format!("/v1/attendees/{id}")).await
    }
}
