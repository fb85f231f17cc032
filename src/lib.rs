//! unibox
//!
//! Typed async client for the Unibox composite inbox API: provider
//! connections, synced messages, sync jobs, tasks, classifications, daily
//! briefs and the aggregated dashboard, all behind a cookie-based session
//! with transparent single-flight refresh.
//!
//! The session cookie is opaque to this crate; it is stored by the
//! underlying HTTP client and renewed through the refresh endpoint when a
//! request comes back 401. Concurrent 401s share one refresh call and each
//! original request is retried exactly once after it settles.
//!
//! ```rust,no_run
//! use unibox::ApiClient;
//! use unibox::types::ConnectionFilter;
//!
//! # async fn example() -> Result<(), unibox::ClientError> {
//! let client = ApiClient::builder("https://inbox.example.com").build()?;
//! let me = client.auth().current_user().await?;
//! let connections = client.connections().list(ConnectionFilter::default()).await?;
//! println!("user {} has {} connections", me.user_id, connections.items.len());
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod paths;
mod query;
mod refresh;
pub mod types;

pub use client::{ApiClient, ApiClientBuilder, RequestOptions};
pub use config::ClientConfig;
pub use error::ClientError;

/// Convenience re-exports for downstream callers.
pub mod prelude {
    pub use crate::client::{ApiClient, RequestOptions};
    pub use crate::config::ClientConfig;
    pub use crate::error::ClientError;
    pub use crate::types::*;
}
