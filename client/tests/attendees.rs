//! Integration tests for attendee operations.

use chrono::NaiveDate;
use erasmus_client::models::{ApplicationStatus, Attendee, AttendeePatch};
use erasmus_client::ClientError;
use erasmus_testing::{fixtures, MockBackend};
use serde_json::json;

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_get_attendees_for_event() {
    let backend = MockBackend::start().await;
    backend
        .respond(
            "GET",
            "/v1/events/7/attendees",
            200,
            fixtures::collection(vec![fixtures::sample_attendee(21), fixtures::sample_attendee(22)]),
        )
        .await;

    let attendees = backend.client().get_attendees(Some(7)).await.unwrap();

    assert_eq!(attendees.len(), 2);
    let first = &attendees[0];
    assert_eq!(first.id, 21);
    assert_eq!(first.firstname, "Anna");
    assert_eq!(first.date_of_birth, NaiveDate::from_ymd_opt(2004, 5, 17));
    assert_eq!(first.special_diet_needs.as_deref(), Some("vegetarian"));
    assert_eq!(first.application_status, Some(ApplicationStatus::Pending));
    assert_eq!(first.is_checked_in, Some(false));
    assert_eq!(first.ticket_id, Some(3));
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_get_all_attendees() {
    let backend = MockBackend::start().await;
    backend
        .respond("GET", "/v1/attendees", 200, fixtures::collection(vec![]))
        .await;

    assert!(backend.client().get_attendees(None).await.unwrap().is_empty());
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_get_attendee_not_found() {
    let backend = MockBackend::start().await;
    backend
        .respond("GET", "/v1/attendees/404", 404, fixtures::error_document("Attendee not found"))
        .await;

    let err = backend.client().get_attendee(404).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 404, .. }));
    assert_eq!(err.to_string(), "Attendee not found");
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_check_in_sends_false_values() {
    let backend = MockBackend::start().await;
    backend
        .respond("PATCH", "/v1/attendees/21", 200, fixtures::document(fixtures::sample_attendee(21)))
        .await;

    let patch = AttendeePatch {
        is_checked_in: Some(false),
        actual_travel_cost: Some(Some(0.0)),
        application_status: Some(ApplicationStatus::Accepted),
        ..AttendeePatch::default()
    };
    backend.client().update_attendee(21, &patch).await.unwrap();

    assert_eq!(
        backend.last_body().await,
        json!({
            "data": {
                "type": "attendee",
                "id": "21",
                "attributes": {
                    "is-checked-in": false,
                    "actual-travel-cost": 0,
                    "application-status": "accepted"
                }
            }
        })
    );
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_delete_attendee() {
    let backend = MockBackend::start().await;
    backend.respond_empty("DELETE", "/v1/attendees/21", 204).await;

    backend.client().delete_attendee(21).await.unwrap();
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_fetch_page_reports_backend_count() {
    let backend = MockBackend::start().await;
    let mut body = fixtures::collection(vec![fixtures::sample_attendee(21)]);
    body["meta"]["count"] = json!(48);
    backend.respond("GET", "/v1/events/7/attendees", 200, body).await;

    let page = backend
        .client()
        .fetch_page::<Attendee>("/v1/events/7/attendees")
        .await
        .unwrap();

    assert_eq!(page.count, Some(48));
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, 21);
}
