//! # Erasmus Client Testing
//!
//! Testing utilities for the Erasmus+ Youth Exchange client.
//!
//! This crate provides:
//! - A wiremock-backed fake of the JSON:API backend
//! - JSON:API fixtures for every resource
//! - Instrumented token stores
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```ignore
//! use erasmus_testing::{fixtures, mocks::MockBackend};
//!
//! #[tokio::test]
//! async fn test_list_events() {
//!     let backend = MockBackend::start().await;
//!     backend
//!         .respond("GET", "/v1/events", 200, fixtures::collection(vec![fixtures::sample_event(1)]))
//!         .await;
//!
//!     let events = backend.client().get_events().await.unwrap();
//!     assert_eq!(events.len(), 1);
//! }
//! ```

// Test infrastructure.
#![allow(clippy::expect_used)]

pub mod fixtures;
pub mod mocks;

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;

    /// `snake_case` identifiers like the ones used for domain field names.
    pub fn snake_identifier() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{0,8}(_[a-z0-9]{1,8}){0,4}"
    }
}

/// Install a test-friendly `tracing` subscriber, filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use mocks::{FailingTokenStore, MockBackend, RecordingTokenStore};
