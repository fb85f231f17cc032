//! Sync job models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A sync job pulling messages for a connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncJob {
    pub id: Uuid,
    pub connection_id: Option<Uuid>,
    pub sync_type: Option<String>,
    pub status: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    /// Service-defined counters (messages fetched, skipped, …).
    pub stats: Option<Value>,
    pub error: Option<String>,
}

/// Payload for triggering a sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncCreate {
    pub connection_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_type: Option<String>,
}

/// Partial update for a sync job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Point-in-time status of a sync job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncStatus {
    pub id: Option<Uuid>,
    pub status: String,
    pub progress: Option<f64>,
    pub message: Option<String>,
}

/// Filters for listing sync jobs.
#[derive(Debug, Clone, Default)]
pub struct SyncFilter {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<String>,
    pub sync_type: Option<String>,
}
