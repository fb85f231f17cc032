//! Classification models, including the UUID-keyed tasks the
//! classification service generates from them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A classification attached to a synced message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub id: Uuid,
    pub message_id: Option<Uuid>,
    /// Label assigned by the classifier, e.g. `action-required`.
    pub label: Option<String>,
    /// Priority on the classification service's 1-10 scale.
    pub priority: Option<i32>,
    pub confidence: Option<f64>,
    pub summary: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Request to classify a batch of messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub message_ids: Vec<Uuid>,
}

/// Outcome of a batch classification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationOutcome {
    #[serde(default)]
    pub classifications: Vec<Classification>,
    #[serde(default)]
    pub total_processed: u32,
    #[serde(default)]
    pub success_count: u32,
    #[serde(default)]
    pub error_count: u32,
}

/// Partial update for a classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

/// Filters for listing classifications.
#[derive(Debug, Clone, Default)]
pub struct ClassificationFilter {
    pub label: Option<String>,
    pub min_priority: Option<i32>,
    pub max_priority: Option<i32>,
}

/// A task generated by the classification service (UUID-keyed, unlike the
/// actions service's integer tasks).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedTask {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    /// Priority on the classification service's 1-10 scale.
    pub priority: Option<i32>,
    pub status: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub classification_id: Option<Uuid>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating a generated task by hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedTaskCreate {
    pub user_id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// Partial update for a generated task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratedTaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// Filters for listing generated tasks.
#[derive(Debug, Clone, Default)]
pub struct GeneratedTaskFilter {
    pub user_id: Option<Uuid>,
    pub status: Option<String>,
    pub priority: Option<i32>,
    pub limit: Option<u32>,
}

/// Request to generate tasks from existing classifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskGenerationRequest {
    pub classification_ids: Vec<Uuid>,
    pub user_id: Uuid,
}

/// Outcome of a task generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskGenerationOutcome {
    #[serde(default)]
    pub tasks: Vec<GeneratedTask>,
    #[serde(default)]
    pub total_generated: u32,
    #[serde(default)]
    pub success_count: u32,
    #[serde(default)]
    pub error_count: u32,
}
