//! Endpoint paths on the composite service.
//!
//! Most endpoints are mounted without an `/api` prefix; the aggregated
//! dashboard is the one exception.

/// Liveness probe for the composite service and its downstream services.
pub const HEALTH: &str = "/health";

/// Provider connections (integrations service).
pub const CONNECTIONS: &str = "/connections";

/// Synced messages (integrations service, shared with classification).
pub const MESSAGES: &str = "/messages";

/// Sync jobs (integrations service).
pub const SYNCS: &str = "/syncs";

/// Tasks owned by the actions service (integer ids).
pub const ACTION_TASKS: &str = "/actions/tasks";

/// Message classifications.
pub const CLASSIFICATIONS: &str = "/classification";

/// Daily briefs.
pub const BRIEFS: &str = "/briefs";

/// Tasks owned by the classification service (UUID ids).
pub const CLASSIFICATION_TASKS: &str = "/classification/tasks";

/// Aggregated health snapshot.
pub const DASHBOARD: &str = "/api/dashboard";

/// Google OAuth login entry point.
pub const AUTH_LOGIN_GOOGLE: &str = "/auth/login/google";

/// Session refresh. Exempt from the 401 refresh-and-retry path.
pub const AUTH_REFRESH: &str = "/auth/refresh";

/// Current-session user lookup.
pub const AUTH_ME: &str = "/auth/me";

/// Gmail account connection (requires an authenticated session).
pub const EXTERNAL_GMAIL: &str = "/external/gmail";
