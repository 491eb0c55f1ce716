//! Partner organizations sending participants to an event.

use crate::jsonapi::Resource;
use crate::wire::{self, wire_fields, Attributes};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

wire_fields! {
    /// Partner organization attribute keys.
    pub enum PartnerOrganizationField {
        Name => ("name", "name"),
        Country => ("country", "country"),
        OidCode => ("oid_code", "oid-code"),
        ContactEmail => ("contact_email", "contact-email"),
        ContactPerson => ("contact_person", "contact-person"),
        ContactPhone => ("contact_phone", "contact-phone"),
        Address => ("address", "address"),
        TravelBudgetLimit => ("travel_budget_limit", "travel-budget-limit"),
        EventId => ("event_id", "event-id"),
        CreatedAt => ("created_at", "created-at"),
        ModifiedAt => ("modified_at", "modified-at"),
    }
}

/// An organization partnering on an exchange.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PartnerOrganization {
    /// Organization id
    pub id: u64,
    /// Legal name
    pub name: String,
    /// Country of registration
    pub country: String,
    /// Erasmus+ organisation id (OID)
    pub oid_code: Option<String>,
    /// Contact email
    pub contact_email: Option<String>,
    /// Contact person
    pub contact_person: Option<String>,
    /// Contact phone
    pub contact_phone: Option<String>,
    /// Postal address
    pub address: Option<String>,
    /// Travel budget cap for this organization's group
    #[serde(default)]
    pub travel_budget_limit: f64,
    /// Event the organization partners on
    pub event_id: Option<u64>,
    /// Creation time
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification time
    pub modified_at: Option<DateTime<Utc>>,
}

impl Resource for PartnerOrganization {
    const TYPE: &'static str = "partner-organization";
    type Field = PartnerOrganizationField;
}

/// Input for creating a partner organization.
#[derive(Clone, Debug, PartialEq)]
pub struct PartnerOrganizationCreate {
    /// Legal name
    pub name: String,
    /// Country of registration
    pub country: String,
    /// Erasmus+ organisation id (OID)
    pub oid_code: Option<String>,
    /// Contact email
    pub contact_email: Option<String>,
    /// Contact person
    pub contact_person: Option<String>,
    /// Contact phone
    pub contact_phone: Option<String>,
    /// Postal address
    pub address: Option<String>,
    /// Travel budget cap
    pub travel_budget_limit: f64,
    /// Owning event
    pub event_id: u64,
}

impl PartnerOrganizationCreate {
    /// Input with the required fields and no contact details.
    #[must_use]
    pub fn new(
        event_id: u64,
        name: impl Into<String>,
        country: impl Into<String>,
        travel_budget_limit: f64,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            oid_code: None,
            contact_email: None,
            contact_person: None,
            contact_phone: None,
            address: None,
            travel_budget_limit,
            event_id,
        }
    }

    /// Builder: Set OID code
    #[must_use]
    pub fn with_oid_code(mut self, oid_code: impl Into<String>) -> Self {
        self.oid_code = Some(oid_code.into());
        self
    }

    /// Builder: Set contact person and email
    #[must_use]
    pub fn with_contact(mut self, person: impl Into<String>, email: impl Into<String>) -> Self {
        self.contact_person = Some(person.into());
        self.contact_email = Some(email.into());
        self
    }

    /// Wire attributes. Nullable fields are always sent, as `null` when unset.
    #[must_use]
    pub fn to_attributes(&self) -> Attributes<PartnerOrganizationField> {
        let mut attrs = Attributes::new();
        attrs
            .set(PartnerOrganizationField::Name, self.name.as_str())
            .set(PartnerOrganizationField::Country, self.country.as_str())
            .set(PartnerOrganizationField::OidCode, self.oid_code.as_deref())
            .set(PartnerOrganizationField::ContactEmail, self.contact_email.as_deref())
            .set(PartnerOrganizationField::ContactPerson, self.contact_person.as_deref())
            .set(PartnerOrganizationField::ContactPhone, self.contact_phone.as_deref())
            .set(PartnerOrganizationField::Address, self.address.as_deref())
            .set(
                PartnerOrganizationField::TravelBudgetLimit,
                wire::number(self.travel_budget_limit),
            );
        attrs
    }
}

/// Partial update of a partner organization.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartnerOrganizationPatch {
    /// Legal name
    pub name: Option<String>,
    /// Country of registration
    pub country: Option<String>,
    /// OID code; `Some(None)` clears it
    pub oid_code: Option<Option<String>>,
    /// Contact email; `Some(None)` clears it
    pub contact_email: Option<Option<String>>,
    /// Contact person; `Some(None)` clears it
    pub contact_person: Option<Option<String>>,
    /// Contact phone; `Some(None)` clears it
    pub contact_phone: Option<Option<String>>,
    /// Address; `Some(None)` clears it
    pub address: Option<Option<String>>,
    /// Travel budget cap
    pub travel_budget_limit: Option<f64>,
}

impl PartnerOrganizationPatch {
    /// Wire attributes for the fields present in the patch.
    #[must_use]
    pub fn to_attributes(&self) -> Attributes<PartnerOrganizationField> {
        let mut attrs = Attributes::new();
        attrs
            .set_opt(PartnerOrganizationField::Name, self.name.as_deref())
            .set_opt(PartnerOrganizationField::Country, self.country.as_deref())
            .set_patch(PartnerOrganizationField::OidCode, self.oid_code.clone())
            .set_patch(PartnerOrganizationField::ContactEmail, self.contact_email.clone())
            .set_patch(PartnerOrganizationField::ContactPerson, self.contact_person.clone())
            .set_patch(PartnerOrganizationField::ContactPhone, self.contact_phone.clone())
            .set_patch(PartnerOrganizationField::Address, self.address.clone())
            .set_opt(
                PartnerOrganizationField::TravelBudgetLimit,
                self.travel_budget_limit.map(wire::number),
            );
        attrs
    }
}
