//! Daily brief models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated daily brief.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brief {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub brief_date: Option<NaiveDate>,
    #[serde(default)]
    pub items: Vec<BriefItem>,
    pub created_at: Option<DateTime<Utc>>,
}

/// One entry in a brief.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefItem {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub priority: Option<i32>,
    pub message_id: Option<Uuid>,
}

/// Request to generate a brief.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefRequest {
    pub user_id: Uuid,
    /// Day to summarize, `YYYY-MM-DD`; defaults to today on the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
}

/// Filters for listing briefs.
#[derive(Debug, Clone, Default)]
pub struct BriefFilter {
    pub user_id: Option<Uuid>,
    pub brief_date: Option<NaiveDate>,
}
