//! Liveness probe endpoint.

use super::decode;
use crate::client::ApiClient;
use crate::error::ClientError;
use crate::paths;
use crate::types::HealthStatus;

/// Health endpoint. Obtained from [`ApiClient::health`].
pub struct HealthApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl HealthApi<'_> {
    /// Check the composite service and the atomic services behind it.
    pub async fn check(&self) -> Result<HealthStatus, ClientError> {
        decode("health status", self.client.get(paths::HEALTH).await?)
    }
}
