//! Resource operations on [`ApiClient`](crate::ApiClient).
//!
//! Each submodule adds one `impl ApiClient` block: list, read, create,
//! update and delete calls for one backend resource.

mod attendees;
mod custom_forms;
mod events;
mod orders;
mod partner_organizations;
mod tickets;
mod users;

/// Collection endpoint, scoped to an event when one is given.
fn scoped(collection: &str, event_id: Option<u64>) -> String {
    match event_id {
        Some(event_id) => format!("/v1/events/{event_id}/{collection}"),
        None => format!("/v1/{collection}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_endpoints() {
        assert_eq!(scoped("attendees", Some(4)), "/v1/events/4/attendees");
        assert_eq!(scoped("partner-organizations", None), "/v1/partner-organizations");
    }
}
