//! Events: the root aggregate of a youth exchange.

use crate::jsonapi::Resource;
use crate::wire::{self, wire_fields, Attributes};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Well-known event states.
pub mod state {
    /// Not yet visible to participants.
    pub const DRAFT: &str = "draft";
    /// Visible and open for registration.
    pub const PUBLISHED: &str = "published";
}

/// Well-known event privacy settings.
pub mod privacy {
    /// Listed publicly.
    pub const PUBLIC: &str = "public";
    /// Reachable by link only.
    pub const PRIVATE: &str = "private";
}

wire_fields! {
    /// Event attribute keys.
    pub enum EventField {
        Name => ("name", "name"),
        Description => ("description", "description"),
        StartsAt => ("starts_at", "starts-at"),
        EndsAt => ("ends_at", "ends-at"),
        LocationName => ("location_name", "location-name"),
        Timezone => ("timezone", "timezone"),
        State => ("state", "state"),
        Privacy => ("privacy", "privacy"),
        LogoUrl => ("logo_url", "logo-url"),
        OriginalImageUrl => ("original_image_url", "original-image-url"),
        SearchableLocationName => ("searchable_location_name", "searchable-location-name"),
        IsSessionsSpeakersEnabled => ("is_sessions_speakers_enabled", "is-sessions-speakers-enabled"),
        IsTicketingEnabled => ("is_ticketing_enabled", "is-ticketing-enabled"),
        IsFeatured => ("is_featured", "is-featured"),
        TicketUrl => ("ticket_url", "ticket-url"),
        CodeOfConduct => ("code_of_conduct", "code-of-conduct"),
        OwnerName => ("owner_name", "owner-name"),
        OwnerDescription => ("owner_description", "owner-description"),
        ExternalEventUrl => ("external_event_url", "external-event-url"),
    }
}

/// An exchange event as returned by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Event id
    pub id: u64,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
    /// Start of the exchange
    pub starts_at: DateTime<Utc>,
    /// End of the exchange
    pub ends_at: DateTime<Utc>,
    /// Venue or city
    pub location_name: Option<String>,
    /// IANA timezone name
    pub timezone: String,
    /// Lifecycle state, see [`state`]
    pub state: String,
    /// Logo image
    pub logo_url: Option<String>,
    /// Cover image
    pub original_image_url: Option<String>,
    /// Location text used for search
    pub searchable_location_name: Option<String>,
    /// Sessions and speakers module enabled
    pub is_sessions_speakers_enabled: Option<bool>,
    /// Ticketing module enabled
    pub is_ticketing_enabled: Option<bool>,
    /// Shown on the landing page
    pub is_featured: Option<bool>,
    /// Visibility, see [`privacy`]
    pub privacy: Option<String>,
    /// External ticket shop
    pub ticket_url: Option<String>,
    /// Code of conduct text
    pub code_of_conduct: Option<String>,
    /// Organizer name
    pub owner_name: Option<String>,
    /// Organizer description
    pub owner_description: Option<String>,
    /// External event page
    pub external_event_url: Option<String>,
}

impl Resource for Event {
    const TYPE: &'static str = "event";
    type Field = EventField;
}

/// Input for creating an event.
///
/// Unset `state`, `privacy` and module flags fall back to a draft,
/// public event with ticketing on and sessions/speakers off.
#[derive(Clone, Debug, PartialEq)]
pub struct EventCreate {
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
    /// Start of the exchange
    pub starts_at: DateTime<Utc>,
    /// End of the exchange
    pub ends_at: DateTime<Utc>,
    /// Venue or city
    pub location_name: Option<String>,
    /// IANA timezone name
    pub timezone: String,
    /// Lifecycle state (default [`state::DRAFT`])
    pub state: Option<String>,
    /// Visibility (default [`privacy::PUBLIC`])
    pub privacy: Option<String>,
    /// Location text used for search
    pub searchable_location_name: Option<String>,
    /// Sessions and speakers module (default off)
    pub is_sessions_speakers_enabled: Option<bool>,
    /// Ticketing module (default on)
    pub is_ticketing_enabled: Option<bool>,
}

impl EventCreate {
    /// Create an event input with the required fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
        timezone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            starts_at,
            ends_at,
            location_name: None,
            timezone: timezone.into(),
            state: None,
            privacy: None,
            searchable_location_name: None,
            is_sessions_speakers_enabled: None,
            is_ticketing_enabled: None,
        }
    }

    /// Builder: Set description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: Set location
    #[must_use]
    pub fn with_location(mut self, location_name: impl Into<String>) -> Self {
        self.location_name = Some(location_name.into());
        self
    }

    /// Builder: Set state
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Builder: Set privacy
    #[must_use]
    pub fn with_privacy(mut self, privacy: impl Into<String>) -> Self {
        self.privacy = Some(privacy.into());
        self
    }

    /// Wire attributes, defaults applied.
    #[must_use]
    pub fn to_attributes(&self) -> Attributes<EventField> {
        let mut attrs = Attributes::new();
        attrs
            .set(EventField::Name, self.name.as_str())
            .set_opt(EventField::Description, self.description.as_deref())
            .set(EventField::StartsAt, wire::timestamp(&self.starts_at))
            .set(EventField::EndsAt, wire::timestamp(&self.ends_at))
            .set_opt(EventField::LocationName, self.location_name.as_deref())
            .set(EventField::Timezone, self.timezone.as_str())
            .set(EventField::State, self.state.as_deref().unwrap_or(state::DRAFT))
            .set(EventField::Privacy, self.privacy.as_deref().unwrap_or(privacy::PUBLIC))
            .set_opt(
                EventField::SearchableLocationName,
                self.searchable_location_name.as_deref(),
            )
            .set(
                EventField::IsSessionsSpeakersEnabled,
                self.is_sessions_speakers_enabled.unwrap_or(false),
            )
            .set(
                EventField::IsTicketingEnabled,
                self.is_ticketing_enabled.unwrap_or(true),
            );
        attrs
    }
}

/// Partial update of an event. Only `Some` fields are sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventPatch {
    /// New name
    pub name: Option<String>,
    /// New description; `Some(None)` clears it
    pub description: Option<Option<String>>,
    /// New start
    pub starts_at: Option<DateTime<Utc>>,
    /// New end
    pub ends_at: Option<DateTime<Utc>>,
    /// New location; `Some(None)` clears it
    pub location_name: Option<Option<String>>,
    /// New timezone
    pub timezone: Option<String>,
    /// New state
    pub state: Option<String>,
    /// New privacy
    pub privacy: Option<String>,
    /// New search location; `Some(None)` clears it
    pub searchable_location_name: Option<Option<String>>,
    /// Toggle sessions and speakers
    pub is_sessions_speakers_enabled: Option<bool>,
    /// Toggle ticketing
    pub is_ticketing_enabled: Option<bool>,
}

impl EventPatch {
    /// Wire attributes for the fields present in the patch.
    #[must_use]
    pub fn to_attributes(&self) -> Attributes<EventField> {
        let mut attrs = Attributes::new();
        attrs
            .set_opt(EventField::Name, self.name.as_deref())
            .set_patch(EventField::Description, self.description.clone())
            .set_opt(EventField::StartsAt, self.starts_at.as_ref().map(wire::timestamp))
            .set_opt(EventField::EndsAt, self.ends_at.as_ref().map(wire::timestamp))
            .set_patch(EventField::LocationName, self.location_name.clone())
            .set_opt(EventField::Timezone, self.timezone.as_deref())
            .set_opt(EventField::State, self.state.as_deref())
            .set_opt(EventField::Privacy, self.privacy.as_deref())
            .set_patch(
                EventField::SearchableLocationName,
                self.searchable_location_name.clone(),
            )
            .set_opt(
                EventField::IsSessionsSpeakersEnabled,
                self.is_sessions_speakers_enabled,
            )
            .set_opt(EventField::IsTicketingEnabled, self.is_ticketing_enabled);
        attrs
    }
}
