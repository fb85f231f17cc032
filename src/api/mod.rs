//! Typed endpoint groups over [`crate::ApiClient`].
//!
//! Each group is a thin facade: build the path (plus query string), go
//! through the client's single entry point, decode the JSON into a model.

mod auth;
mod classification;
mod connections;
mod dashboard;
mod health;
mod messages;
mod syncs;
mod tasks;

pub use auth::AuthApi;
pub use classification::ClassificationApi;
pub use connections::ConnectionsApi;
pub use dashboard::DashboardApi;
pub use health::HealthApi;
pub use messages::MessagesApi;
pub use syncs::SyncsApi;
pub use tasks::TasksApi;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Decode a response value into a typed model, naming what failed.
pub(crate) fn decode<T: DeserializeOwned>(what: &str, value: Value) -> Result<T, ClientError> {
    serde_json::from_value(value)
        .map_err(|e| ClientError::Decode(format!("failed to decode {what}: {e}")))
}
