//! JSON:API documents as the backend sends them.

use serde_json::{json, Value};

/// A resource object with a string id.
#[must_use]
pub fn resource(kind: &str, id: u64, attributes: Value) -> Value {
    json!({
        "id": id.to_string(),
        "type": kind,
        "attributes": attributes,
    })
}

/// A resource object with a to-one `relationships` member.
#[must_use]
pub fn with_relationship(mut resource: Value, name: &str, kind: &str, id: u64) -> Value {
    resource["relationships"][name] = json!({ "data": { "type": kind, "id": id.to_string() } });
    resource
}

/// Single-resource document.
#[must_use]
pub fn document(resource: Value) -> Value {
    json!({ "data": resource })
}

/// Collection document with `meta.count`.
#[must_use]
pub fn collection(resources: Vec<Value>) -> Value {
    let count = resources.len();
    json!({ "data": resources, "meta": { "count": count } })
}

/// JSON:API error document with one error.
#[must_use]
pub fn error_document(detail: &str) -> Value {
    json!({ "errors": [{ "status": "422", "detail": detail }] })
}

/// Event resource.
#[must_use]
pub fn sample_event(id: u64) -> Value {
    resource(
        "event",
        id,
        json!({
            "name": format!("Youth Exchange {id}"),
            "description": "Seven days of workshops on media literacy",
            "starts-at": "2025-07-01T08:00:00Z",
            "ends-at": "2025-07-08T16:00:00Z",
            "location-name": "Kraków",
            "timezone": "Europe/Warsaw",
            "state": "published",
            "privacy": "public",
            "is-sessions-speakers-enabled": false,
            "is-ticketing-enabled": true,
        }),
    )
}

/// Partner organization resource linked to `event_id`.
#[must_use]
pub fn sample_partner_organization(id: u64, event_id: u64) -> Value {
    with_relationship(
        resource(
            "partner-organization",
            id,
            json!({
                "name": "Stowarzyszenie Młodzi Razem",
                "country": "PL",
                "oid-code": "E10123456",
                "contact-email": "office@mlodzi.pl",
                "contact-person": "Ewa Nowak",
                "contact-phone": null,
                "address": null,
                "travel-budget-limit": 275.5,
            }),
        ),
        "event",
        "event",
        event_id,
    )
}

/// Attendee resource.
#[must_use]
pub fn sample_attendee(id: u64) -> Value {
    resource(
        "attendee",
        id,
        json!({
            "firstname": "Anna",
            "lastname": "Kowalska",
            "email": "anna@example.pl",
            "date-of-birth": "2004-05-17",
            "nationality": "PL",
            "special-diet-needs": "vegetarian",
            "is-checked-in": false,
            "application-status": "pending",
            "event-id": 7,
            "ticket-id": 3,
        }),
    )
}

/// Ticket resource.
#[must_use]
pub fn sample_ticket(id: u64) -> Value {
    resource(
        "ticket",
        id,
        json!({
            "name": "Participant",
            "type": "free",
            "price": 0.0,
            "quantity": 30,
            "is-description-visible": true,
            "position": 1,
            "is-fee-absorbed": false,
            "is-hidden": false,
            "min-order": 1,
            "max-order": 1,
        }),
    )
}

/// Order resource.
#[must_use]
pub fn sample_order(id: u64) -> Value {
    resource(
        "order",
        id,
        json!({
            "identifier": format!("ord-{id:04}"),
            "amount": 0,
            "status": "completed",
            "payment-mode": "free",
            "completed-at": "2025-05-02T12:00:00Z",
        }),
    )
}

/// User resource.
#[must_use]
pub fn sample_user(id: u64) -> Value {
    resource(
        "user",
        id,
        json!({
            "email": "coordinator@example.eu",
            "first-name": "Jan",
            "last-name": "Kowalski",
            "is-admin": true,
            "is-super-admin": false,
            "is-verified": true,
        }),
    )
}

/// Custom form field resource.
#[must_use]
pub fn sample_custom_form(id: u64) -> Value {
    resource(
        "custom-form",
        id,
        json!({
            "field-identifier": "nationality",
            "form": "attendee",
            "type": "text",
            "name": "Nationality",
            "is-required": true,
            "is-included": true,
            "is-fixed": false,
            "position": 4,
        }),
    )
}
