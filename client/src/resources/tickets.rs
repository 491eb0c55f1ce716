use crate::client::ApiClient;
use crate::error::Result;
use crate::jsonapi::{NewResource, Resource};
use crate::models::{Event, Ticket, TicketDraft};
use reqwest::Method;

impl ApiClient {
    /// List the tickets offered by an event.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn get_tickets(&self, event_id: u64) -> Result<Vec<Ticket>> {
        self.fetch_many(&format!("/v1/events/{event_id}/tickets")).await
    }

    /// Create a ticket for an event; unset fields take the ticket defaults.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn create_ticket(&self, event_id: u64, data: &TicketDraft) -> Result<Ticket> {
        let body = NewResource::create(Ticket::TYPE, data.to_attributes())
            .belongs_to("event", Event::TYPE, event_id)
            .into_document();
        let ticket: Ticket = self.send_one(Method::POST, "/v1/tickets", &body).await?;
        tracing::info!(ticket_id = ticket.id, event_id, "Created ticket");
        Ok(ticket)
    }
}
