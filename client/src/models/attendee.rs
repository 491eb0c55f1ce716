//! Attendees: registered participants of an exchange.

use crate::jsonapi::Resource;
use crate::wire::{self, wire_fields, Attributes};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

wire_fields! {
    /// Attendee attribute keys.
    pub enum AttendeeField {
        Firstname => ("firstname", "firstname"),
        Lastname => ("lastname", "lastname"),
        Email => ("email", "email"),
        DateOfBirth => ("date_of_birth", "date-of-birth"),
        Nationality => ("nationality", "nationality"),
        SpecialDietNeeds => ("special_diet_needs", "special-diet-needs"),
        HealthIssues => ("health_issues", "health-issues"),
        ActualTravelCost => ("actual_travel_cost", "actual-travel-cost"),
        EmergencyContactName => ("emergency_contact_name", "emergency-contact-name"),
        EmergencyContactPhone => ("emergency_contact_phone", "emergency-contact-phone"),
        PassportNumber => ("passport_number", "passport-number"),
        PassportExpiryDate => ("passport_expiry_date", "passport-expiry-date"),
        PartnerOrganizationId => ("partner_organization_id", "partner-organization-id"),
        EventId => ("event_id", "event-id"),
        OrderId => ("order_id", "order-id"),
        TicketId => ("ticket_id", "ticket-id"),
        IsCheckedIn => ("is_checked_in", "is-checked-in"),
        CheckinTimes => ("checkin_times", "checkin-times"),
        ApplicationStatus => ("application_status", "application-status"),
    }
}

/// Where an attendee's application stands.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Waiting for the sending organization
    Pending,
    /// Accepted onto the exchange
    Accepted,
    /// Not accepted
    Rejected,
}

impl ApplicationStatus {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl From<ApplicationStatus> for Value {
    fn from(status: ApplicationStatus) -> Self {
        Self::from(status.as_str())
    }
}

/// A participant registered for an event.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Attendee {
    /// Attendee id
    pub id: u64,
    /// Given name
    pub firstname: String,
    /// Family name
    pub lastname: String,
    /// Contact email
    pub email: String,
    /// Date of birth
    pub date_of_birth: Option<NaiveDate>,
    /// Nationality
    pub nationality: Option<String>,
    /// Dietary requirements
    pub special_diet_needs: Option<String>,
    /// Health information shared with organizers
    pub health_issues: Option<String>,
    /// Travel cost actually incurred, for reimbursement
    pub actual_travel_cost: Option<f64>,
    /// Emergency contact name
    pub emergency_contact_name: Option<String>,
    /// Emergency contact phone
    pub emergency_contact_phone: Option<String>,
    /// Passport number
    pub passport_number: Option<String>,
    /// Passport expiry
    pub passport_expiry_date: Option<NaiveDate>,
    /// Sending partner organization
    pub partner_organization_id: Option<u64>,
    /// Event the attendee registered for
    pub event_id: Option<u64>,
    /// Order that created the attendee
    pub order_id: Option<u64>,
    /// Ticket held
    pub ticket_id: Option<u64>,
    /// Checked in on site
    pub is_checked_in: Option<bool>,
    /// Raw check-in timestamps
    pub checkin_times: Option<String>,
    /// Application review status
    pub application_status: Option<ApplicationStatus>,
}

impl Resource for Attendee {
    const TYPE: &'static str = "attendee";
    type Field = AttendeeField;
}

/// Attendee details submitted together with an order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttendeeDraft {
    /// Given name
    pub firstname: String,
    /// Family name
    pub lastname: String,
    /// Contact email
    pub email: String,
    /// Date of birth
    pub date_of_birth: Option<NaiveDate>,
    /// Nationality
    pub nationality: Option<String>,
    /// Dietary requirements
    pub special_diet_needs: Option<String>,
    /// Health information
    pub health_issues: Option<String>,
    /// Emergency contact name
    pub emergency_contact_name: Option<String>,
    /// Emergency contact phone
    pub emergency_contact_phone: Option<String>,
}

impl AttendeeDraft {
    /// Draft with the identity fields every registration needs.
    #[must_use]
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Wire attributes; unset optional fields are left out.
    #[must_use]
    pub fn to_attributes(&self) -> Attributes<AttendeeField> {
        let mut attrs = Attributes::new();
        attrs
            .set(AttendeeField::Firstname, self.firstname.as_str())
            .set(AttendeeField::Lastname, self.lastname.as_str())
            .set(AttendeeField::Email, self.email.as_str())
            .set_opt(AttendeeField::DateOfBirth, self.date_of_birth.as_ref().map(wire::date))
            .set_opt(AttendeeField::Nationality, self.nationality.as_deref())
            .set_opt(AttendeeField::SpecialDietNeeds, self.special_diet_needs.as_deref())
            .set_opt(AttendeeField::HealthIssues, self.health_issues.as_deref())
            .set_opt(
                AttendeeField::EmergencyContactName,
                self.emergency_contact_name.as_deref(),
            )
            .set_opt(
                AttendeeField::EmergencyContactPhone,
                self.emergency_contact_phone.as_deref(),
            );
        attrs
    }
}

/// Partial update of an attendee. Only `Some` fields are sent;
/// `Some(None)` on a nullable field sends `null`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttendeePatch {
    /// Given name
    pub firstname: Option<String>,
    /// Family name
    pub lastname: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Date of birth
    pub date_of_birth: Option<Option<NaiveDate>>,
    /// Nationality
    pub nationality: Option<Option<String>>,
    /// Dietary requirements
    pub special_diet_needs: Option<Option<String>>,
    /// Health information
    pub health_issues: Option<Option<String>>,
    /// Travel cost actually incurred
    pub actual_travel_cost: Option<Option<f64>>,
    /// Emergency contact name
    pub emergency_contact_name: Option<Option<String>>,
    /// Emergency contact phone
    pub emergency_contact_phone: Option<Option<String>>,
    /// Passport number
    pub passport_number: Option<Option<String>>,
    /// Passport expiry
    pub passport_expiry_date: Option<Option<NaiveDate>>,
    /// Check-in flag
    pub is_checked_in: Option<bool>,
    /// Application review status
    pub application_status: Option<ApplicationStatus>,
}

impl AttendeePatch {
    /// Wire attributes for the fields present in the patch.
    #[must_use]
    pub fn to_attributes(&self) -> Attributes<AttendeeField> {
        let mut attrs = Attributes::new();
        attrs
            .set_opt(AttendeeField::Firstname, self.firstname.as_deref())
            .set_opt(AttendeeField::Lastname, self.lastname.as_deref())
            .set_opt(AttendeeField::Email, self.email.as_deref())
            .set_patch(
                AttendeeField::DateOfBirth,
                self.date_of_birth.map(|day| day.as_ref().map(wire::date)),
            )
            .set_patch(AttendeeField::Nationality, self.nationality.clone())
            .set_patch(AttendeeField::SpecialDietNeeds, self.special_diet_needs.clone())
            .set_patch(AttendeeField::HealthIssues, self.health_issues.clone())
            .set_patch(
                AttendeeField::ActualTravelCost,
                self.actual_travel_cost.map(|cost| cost.map(wire::number)),
            )
            .set_patch(
                AttendeeField::EmergencyContactName,
                self.emergency_contact_name.clone(),
            )
            .set_patch(
                AttendeeField::EmergencyContactPhone,
                self.emergency_contact_phone.clone(),
            )
            .set_patch(AttendeeField::PassportNumber, self.passport_number.clone())
            .set_patch(
                AttendeeField::PassportExpiryDate,
                self.passport_expiry_date.map(|day| day.as_ref().map(wire::date)),
            )
            .set_opt(AttendeeField::IsCheckedIn, self.is_checked_in)
            .set_opt(AttendeeField::ApplicationStatus, self.application_status);
        attrs
    }
}
