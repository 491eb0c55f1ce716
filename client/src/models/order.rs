//! Orders: registration transactions bundling attendees against tickets.

use crate::jsonapi::Resource;
use crate::wire::{wire_fields, Attributes};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment mode used for registrations; exchanges are grant-funded.
pub const FREE_PAYMENT_MODE: &str = "free";

wire_fields! {
    /// Order attribute keys.
    pub enum OrderField {
        Identifier => ("identifier", "identifier"),
        Amount => ("amount", "amount"),
        Status => ("status", "status"),
        CompletedAt => ("completed_at", "completed-at"),
        PaidVia => ("paid_via", "paid-via"),
        PaymentMode => ("payment_mode", "payment-mode"),
        EventId => ("event_id", "event-id"),
        UserId => ("user_id", "user-id"),
    }
}

/// A registration order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Order id
    pub id: u64,
    /// Public order identifier
    #[serde(default)]
    pub identifier: String,
    /// Total amount
    #[serde(default)]
    pub amount: f64,
    /// Order status (e.g. `"pending"`, `"completed"`)
    #[serde(default)]
    pub status: String,
    /// Completion time
    pub completed_at: Option<DateTime<Utc>>,
    /// Payment channel
    pub paid_via: Option<String>,
    /// Payment mode
    #[serde(default)]
    pub payment_mode: String,
    /// Event ordered for
    pub event_id: Option<u64>,
    /// Ordering user
    pub user_id: Option<u64>,
}

impl Resource for Order {
    const TYPE: &'static str = "order";
    type Field = OrderField;
}

/// Attributes of a free registration order.
#[must_use]
pub fn free_order_attributes() -> Attributes<OrderField> {
    let mut attrs = Attributes::new();
    attrs
        .set(OrderField::Amount, 0)
        .set(OrderField::PaymentMode, FREE_PAYMENT_MODE);
    attrs
}
