use super::scoped;
use crate::client::ApiClient;
use crate::error::Result;
use crate::jsonapi::{NewResource, Resource};
use crate::models::{
    Event, PartnerOrganization, PartnerOrganizationCreate, PartnerOrganizationPatch,
};
use reqwest::Method;

impl ApiClient {
    /// List partner organizations of one event, or all of them.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn get_partner_organizations(
        &self,
        event_id: Option<u64>,
    ) -> Result<Vec<PartnerOrganization>> {
        self.fetch_many(&scoped("partner-organizations", event_id)).await
    }

    /// Fetch one partner organization.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn get_partner_organization(&self, id: u64) -> Result<PartnerOrganization> {
        self.fetch_one(&format!("/v1/partner-organizations/{id}")).await
    }

    /// Register a partner organization with its event.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn create_partner_organization(
        &self,
        data: &PartnerOrganizationCreate,
    ) -> Result<PartnerOrganization> {
        let body = NewResource::create(PartnerOrganization::TYPE, data.to_attributes())
            .belongs_to("event", Event::TYPE, data.event_id)
            .into_document();
        let organization: PartnerOrganization = self
            .send_one(Method::POST, "/v1/partner-organizations", &body)
            .await?;
        tracing::info!(
            partner_organization_id = organization.id,
            event_id = data.event_id,
            "Created partner organization"
        );
        Ok(organization)
    }

    /// Apply a partial update to a partner organization.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn update_partner_organization(
        &self,
        id: u64,
        patch: &PartnerOrganizationPatch,
    ) -> Result<PartnerOrganization> {
        let body = NewResource::update(PartnerOrganization::TYPE, id, patch.to_attributes())
            .into_document();
        self.send_one(Method::PATCH, &format!("/v1/partner-organizations/{id}"), &body)
            .await
    }

    /// Delete a partner organization.
    ///
    /// # Errors
    ///
    /// Fails on transport or API errors.
    pub async fn delete_partner_organization(&self, id: u64) -> Result<()> {
        self.delete(&format!("/v1/partner-organizations/{id}")).await
    }
}
