//! Session models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response of the current-session user lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub user_id: Uuid,
}

/// OAuth redirect returned by the login and account-connection endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OauthRedirect {
    /// URL the caller should navigate to in order to complete the flow.
    pub auth_url: String,
}
