//! Tickets: registration slots offered by an event.

use crate::jsonapi::Resource;
use crate::wire::{self, wire_fields, Attributes};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Well-known ticket types.
pub mod kind {
    /// No payment required
    pub const FREE: &str = "free";
    /// Fixed price
    pub const PAID: &str = "paid";
    /// Pay what you want
    pub const DONATION: &str = "donation";
}

/// Values used for fields a ticket draft leaves unset.
pub mod defaults {
    /// Ticket type
    pub const KIND: &str = super::kind::FREE;
    /// Price
    pub const PRICE: f64 = 0.0;
    /// Available quantity
    pub const QUANTITY: u32 = 100;
    /// Description shown to buyers
    pub const IS_DESCRIPTION_VISIBLE: bool = true;
    /// Sort position
    pub const POSITION: u32 = 1;
    /// Organizer absorbs fees
    pub const IS_FEE_ABSORBED: bool = false;
    /// Hidden from the public page
    pub const IS_HIDDEN: bool = false;
    /// Minimum per order
    pub const MIN_ORDER: u32 = 1;
    /// Maximum per order
    pub const MAX_ORDER: u32 = 10;
}

wire_fields! {
    /// Ticket attribute keys.
    pub enum TicketField {
        Name => ("name", "name"),
        Description => ("description", "description"),
        Kind => ("type", "type"),
        Price => ("price", "price"),
        Quantity => ("quantity", "quantity"),
        IsDescriptionVisible => ("is_description_visible", "is-description-visible"),
        Position => ("position", "position"),
        IsFeeAbsorbed => ("is_fee_absorbed", "is-fee-absorbed"),
        SalesStartsAt => ("sales_starts_at", "sales-starts-at"),
        SalesEndsAt => ("sales_ends_at", "sales-ends-at"),
        IsHidden => ("is_hidden", "is-hidden"),
        MinOrder => ("min_order", "min-order"),
        MaxOrder => ("max_order", "max-order"),
        EventId => ("event_id", "event-id"),
    }
}

/// A ticket type offered for an event.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    /// Ticket id
    pub id: u64,
    /// Display name
    pub name: String,
    /// Description
    pub description: Option<String>,
    /// Ticket type, see [`kind`]
    #[serde(rename = "type")]
    pub kind: String,
    /// Unit price
    #[serde(default)]
    pub price: f64,
    /// Available quantity
    #[serde(default)]
    pub quantity: u32,
    /// Description shown to buyers
    #[serde(default)]
    pub is_description_visible: bool,
    /// Sort position
    #[serde(default)]
    pub position: u32,
    /// Organizer absorbs fees
    #[serde(default)]
    pub is_fee_absorbed: bool,
    /// Sales window start
    pub sales_starts_at: Option<DateTime<Utc>>,
    /// Sales window end
    pub sales_ends_at: Option<DateTime<Utc>>,
    /// Hidden from the public page
    #[serde(default)]
    pub is_hidden: bool,
    /// Minimum per order
    #[serde(default)]
    pub min_order: u32,
    /// Maximum per order
    #[serde(default)]
    pub max_order: u32,
    /// Owning event
    pub event_id: Option<u64>,
}

impl Resource for Ticket {
    const TYPE: &'static str = "ticket";
    type Field = TicketField;
}

/// Input for creating a ticket; every field is optional and unset
/// fields take the values in [`defaults`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TicketDraft {
    /// Display name
    pub name: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Ticket type
    pub kind: Option<String>,
    /// Unit price
    pub price: Option<f64>,
    /// Available quantity
    pub quantity: Option<u32>,
    /// Description shown to buyers
    pub is_description_visible: Option<bool>,
    /// Sort position
    pub position: Option<u32>,
    /// Organizer absorbs fees
    pub is_fee_absorbed: Option<bool>,
    /// Sales window start
    pub sales_starts_at: Option<DateTime<Utc>>,
    /// Sales window end
    pub sales_ends_at: Option<DateTime<Utc>>,
    /// Hidden from the public page
    pub is_hidden: Option<bool>,
    /// Minimum per order
    pub min_order: Option<u32>,
    /// Maximum per order
    pub max_order: Option<u32>,
}

impl TicketDraft {
    /// Draft with just a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Wire attributes with defaults filled in.
    #[must_use]
    pub fn to_attributes(&self) -> Attributes<TicketField> {
        let mut attrs = Attributes::new();
        attrs
            .set_opt(TicketField::Name, self.name.as_deref())
            .set_opt(TicketField::Description, self.description.as_deref())
            .set(TicketField::Kind, self.kind.as_deref().unwrap_or(defaults::KIND))
            .set(
                TicketField::Price,
                wire::number(self.price.unwrap_or(defaults::PRICE)),
            )
            .set(TicketField::Quantity, self.quantity.unwrap_or(defaults::QUANTITY))
            .set(
                TicketField::IsDescriptionVisible,
                self.is_description_visible
                    .unwrap_or(defaults::IS_DESCRIPTION_VISIBLE),
            )
            .set(TicketField::Position, self.position.unwrap_or(defaults::POSITION))
            .set(
                TicketField::IsFeeAbsorbed,
                self.is_fee_absorbed.unwrap_or(defaults::IS_FEE_ABSORBED),
            )
            .set_opt(
                TicketField::SalesStartsAt,
                self.sales_starts_at.as_ref().map(wire::timestamp),
            )
            .set_opt(
                TicketField::SalesEndsAt,
                self.sales_ends_at.as_ref().map(wire::timestamp),
            )
            .set(TicketField::IsHidden, self.is_hidden.unwrap_or(defaults::IS_HIDDEN))
            .set(TicketField::MinOrder, self.min_order.unwrap_or(defaults::MIN_ORDER))
            .set(TicketField::MaxOrder, self.max_order.unwrap_or(defaults::MAX_ORDER));
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_named_draft_gets_every_default() {
        assert_eq!(
            Value::Object(TicketDraft::named("VIP").to_attributes().into_map()),
            json!({
                "name": "VIP",
                "type": "free",
                "price": 0,
                "quantity": 100,
                "is-description-visible": true,
                "position": 1,
                "is-fee-absorbed": false,
                "is-hidden": false,
                "min-order": 1,
                "max-order": 10
            })
        );
    }

    #[test]
    fn test_explicit_zero_quantity_is_kept() {
        let draft = TicketDraft {
            quantity: Some(0),
            kind: Some(kind::PAID.to_string()),
            price: Some(25.5),
            ..TicketDraft::default()
        };
        let attrs = draft.to_attributes().into_map();
        assert_eq!(attrs["quantity"], json!(0));
        assert_eq!(attrs["type"], json!("paid"));
        assert_eq!(attrs["price"], json!(25.5));
        assert!(!attrs.contains_key("name"));
    }
}
