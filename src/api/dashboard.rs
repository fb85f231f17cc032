//! Aggregated dashboard endpoint.

use super::decode;
use crate::client::ApiClient;
use crate::error::ClientError;
use crate::paths;
use crate::types::DashboardSnapshot;

/// Dashboard endpoint. Obtained from [`ApiClient::dashboard`].
pub struct DashboardApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl DashboardApi<'_> {
    /// Fetch the aggregated health snapshot across all services.
    pub async fn get(&self) -> Result<DashboardSnapshot, ClientError> {
        decode("dashboard", self.client.get(paths::DASHBOARD).await?)
    }
}
