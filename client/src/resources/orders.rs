use super::scoped;
use crate::client::ApiClient;
use crate::error::Result;
use crate::jsonapi::{NewResource, Relationship, Resource};
use crate::models::order::free_order_attributes;
use crate::models::{Attendee, AttendeeDraft, Event, Order, Ticket};
use reqwest::Method;

impl ApiClient {
    /// List orders of one event, or all of them.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn get_orders(&self, event_id: Option<u64>) -> Result<Vec<Order>> {
        self.fetch_many(&scoped("orders", event_id)).await
    }

    /// Register `attendee` for `event_id` on `ticket_id` as a free order.
    ///
    /// The attendee is created inside the order body, not referenced.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn create_order(
        &self,
        event_id: u64,
        ticket_id: u64,
        attendee: &AttendeeDraft,
    ) -> Result<Order> {
        let attendee = NewResource::create(Attendee::TYPE, attendee.to_attributes())
            .belongs_to("ticket", Ticket::TYPE, ticket_id);
        let body = NewResource::create(Order::TYPE, free_order_attributes())
            .belongs_to("event", Event::TYPE, event_id)
            .with_relationship("attendees", Relationship::Nested(vec![attendee]))
            .into_document();

        let order: Order = self.send_one(Method::POST, "/v1/orders", &body).await?;
        tracing::info!(order_id = order.id, event_id, ticket_id, "Created order");
        Ok(order)
    }
}
