//! Sync job endpoints.

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use super::decode;
use crate::client::{ApiClient, RequestOptions};
use crate::error::ClientError;
use crate::paths;
use crate::query::QueryString;
use crate::types::{Page, SyncCreate, SyncFilter, SyncJob, SyncStatus, SyncUpdate};

/// Sync job endpoints. Obtained from [`ApiClient::syncs`].
pub struct SyncsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl SyncsApi<'_> {
    pub async fn list(&self, filter: SyncFilter) -> Result<Page<SyncJob>, ClientError> {
        let mut query = QueryString::new();
        query.push_opt("skip", filter.skip);
        query.push_opt("limit", filter.limit);
        query.push_opt("status", filter.status.as_deref());
        query.push_opt("sync_type", filter.sync_type.as_deref());
        let path = query.append_to(paths::SYNCS);
        decode("sync list", self.client.get(&path).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<SyncJob, ClientError> {
        let path = format!("{}/{}", paths::SYNCS, id);
        decode("sync job", self.client.get(&path).await?)
    }

    pub async fn status(&self, id: Uuid) -> Result<SyncStatus, ClientError> {
        let path = format!("{}/{}/status", paths::SYNCS, id);
        decode("sync status", self.client.get(&path).await?)
    }

    /// Trigger a sync and wait for the service to acknowledge it.
    pub async fn create(&self, request: SyncCreate) -> Result<SyncJob, ClientError> {
        let body = serde_json::to_value(&request)?;
        decode("created sync", self.client.post(paths::SYNCS, body).await?)
    }

    /// Trigger a sync without waiting for the outcome.
    ///
    /// The call runs as a detached task; failures are logged and never
    /// reach the initiating caller. The returned handle is only useful for
    /// tests that want to await completion.
    pub fn trigger_background(&self, request: SyncCreate) -> tokio::task::JoinHandle<()> {
        let client = self.client.clone();
        tokio::spawn(async move {
            let result = async {
                let body = serde_json::to_value(&request)?;
                client
                    .request_json(
                        paths::SYNCS,
                        RequestOptions::new().method(Method::POST).body(body),
                    )
                    .await
            }
            .await;
            match result {
                Ok(_) => debug!(connection_id = %request.connection_id, "background sync triggered"),
                Err(error) => {
                    warn!(connection_id = %request.connection_id, %error, "background sync failed")
                }
            }
        })
    }

    pub async fn update(&self, id: Uuid, request: SyncUpdate) -> Result<SyncJob, ClientError> {
        let path = format!("{}/{}", paths::SYNCS, id);
        let body = serde_json::to_value(&request)?;
        decode("updated sync", self.client.patch(&path, body).await?)
    }

    /// Delete a sync job record; returns the service's deletion summary.
    pub async fn delete(&self, id: Uuid) -> Result<Value, ClientError> {
        let path = format!("{}/{}", paths::SYNCS, id);
        self.client.delete(&path).await
    }
}
