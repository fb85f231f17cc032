//! Provider connection models (integrations service).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A connected email/chat provider account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    /// Provider identifier, e.g. `gmail` or `slack`.
    pub provider: String,
    pub display_name: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    pub last_synced_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionCreate {
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Provider-specific settings passed through opaquely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

/// Partial update for a connection; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

/// Filters for listing connections.
#[derive(Debug, Clone, Default)]
pub struct ConnectionFilter {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub provider: Option<String>,
    pub status: Option<String>,
    pub is_active: Option<bool>,
}
