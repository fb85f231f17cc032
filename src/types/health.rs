//! Health and dashboard models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health of one downstream service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    pub detail: Option<String>,
    pub latency_ms: Option<u64>,
}

/// Composite liveness response, covering the composite service itself and
/// the atomic services it delegates to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub services: HashMap<String, ServiceHealth>,
}

/// Aggregated dashboard snapshot; the composite service probes every
/// downstream service in parallel and reports the results together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub status: Option<String>,
    #[serde(default)]
    pub services: HashMap<String, ServiceHealth>,
    pub generated_at: Option<DateTime<Utc>>,
}
