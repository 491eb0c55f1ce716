//! # Erasmus+ Youth Exchange API Client
//!
//! Typed async client for the Erasmus+ Youth Exchange backend, a JSON:API
//! service managing exchange events, partner organizations, tickets,
//! orders, attendees, custom registration forms and users.
//!
//! ## Example
//!
//! ```no_run
//! use erasmus_client::{ApiClient, ClientConfig, Session};
//! use erasmus_client::models::AttendeeDraft;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://api.exchange.example");
//!     let client = ApiClient::new(config, Arc::new(Session::new()))?;
//!
//!     client.login("coordinator@example.eu", "password").await?;
//!
//!     for event in client.get_upcoming_events().await? {
//!         println!("{} starts {}", event.name, event.starts_at);
//!     }
//!
//!     let applicant = AttendeeDraft::new("Anna", "Kowalska", "anna@example.pl");
//!     let order = client.create_order(7, 3, &applicant).await?;
//!     println!("Registered with order {}", order.id);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - One typed call per backend operation
//! - `snake_case` domain model, `kebab-case` on the wire, mapped through
//!   per-resource field tables
//! - Validated decoding (resource type, positive integer ids)
//! - Injected [`Session`] with optional file persistence
//! - Google OAuth helpers for sign-up with a Google account

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

pub mod client;
pub mod config;
pub mod error;
pub mod google;
pub mod jsonapi;
pub mod models;
mod resources;
pub mod session;
pub mod store;
pub mod wire;

// Re-export main types for convenience
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use google::{GoogleOAuth, GoogleOAuthConfig};
pub use session::Session;
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
