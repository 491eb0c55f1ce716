//! Per-event registration form field definitions.

use crate::jsonapi::Resource;
use crate::wire::wire_fields;
use serde::{Deserialize, Serialize};

wire_fields! {
    /// Custom form attribute keys.
    pub enum CustomFormField {
        FieldIdentifier => ("field_identifier", "field-identifier"),
        Form => ("form", "form"),
        Kind => ("type", "type"),
        Name => ("name", "name"),
        Description => ("description", "description"),
        IsRequired => ("is_required", "is-required"),
        IsIncluded => ("is_included", "is-included"),
        IsFixed => ("is_fixed", "is-fixed"),
        Position => ("position", "position"),
        EventId => ("event_id", "event-id"),
    }
}

/// One field of an event's registration form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomForm {
    /// Field definition id
    pub id: u64,
    /// Stable field key (e.g. `"firstname"`)
    pub field_identifier: String,
    /// Form the field belongs to (e.g. `"attendee"`)
    pub form: String,
    /// Input type (e.g. `"text"`, `"email"`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Label
    #[serde(default)]
    pub name: String,
    /// Help text
    pub description: Option<String>,
    /// Must be filled in
    #[serde(default)]
    pub is_required: bool,
    /// Shown on the form
    #[serde(default)]
    pub is_included: bool,
    /// Cannot be removed by organizers
    #[serde(default)]
    pub is_fixed: bool,
    /// Sort position
    #[serde(default)]
    pub position: u32,
    /// Owning event
    pub event_id: Option<u64>,
}

impl Resource for CustomForm {
    const TYPE: &'static str = "custom-form";
    type Field = CustomFormField;
}
