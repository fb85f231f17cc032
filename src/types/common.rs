//! Shared response envelopes.

use serde::{Deserialize, Serialize};

/// Paginated list envelope used by the integrations and actions services.
/// The classification service returns bare arrays instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}
