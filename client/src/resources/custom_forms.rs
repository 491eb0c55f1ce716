use crate::client::ApiClient;
use crate::error::Result;
use crate::models::CustomForm;

impl ApiClient {
    /// List the registration form fields configured for an event.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn get_custom_forms(&self, event_id: u64) -> Result<Vec<CustomForm>> {
        self.fetch_many(&format!("/v1/events/{event_id}/custom-forms")).await
    }
}
