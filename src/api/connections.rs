//! Provider connection endpoints.

use serde_json::Value;
use uuid::Uuid;

use super::decode;
use crate::client::ApiClient;
use crate::error::ClientError;
use crate::paths;
use crate::query::QueryString;
use crate::types::{Connection, ConnectionCreate, ConnectionFilter, ConnectionUpdate, Page};

/// Connection management endpoints. Obtained from [`ApiClient::connections`].
pub struct ConnectionsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ConnectionsApi<'_> {
    pub async fn list(&self, filter: ConnectionFilter) -> Result<Page<Connection>, ClientError> {
        let mut query = QueryString::new();
        query.push_opt("skip", filter.skip);
        query.push_opt("limit", filter.limit);
        query.push_opt("provider", filter.provider.as_deref());
        query.push_opt("status", filter.status.as_deref());
        query.push_opt("is_active", filter.is_active);
        let path = query.append_to(paths::CONNECTIONS);
        decode("connection list", self.client.get(&path).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Connection, ClientError> {
        let path = format!("{}/{}", paths::CONNECTIONS, id);
        decode("connection", self.client.get(&path).await?)
    }

    pub async fn create(&self, request: ConnectionCreate) -> Result<Connection, ClientError> {
        let body = serde_json::to_value(&request)?;
        decode(
            "created connection",
            self.client.post(paths::CONNECTIONS, body).await?,
        )
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: ConnectionUpdate,
    ) -> Result<Connection, ClientError> {
        let path = format!("{}/{}", paths::CONNECTIONS, id);
        let body = serde_json::to_value(&request)?;
        decode("updated connection", self.client.patch(&path, body).await?)
    }

    /// Delete a connection; returns the service's deletion summary.
    pub async fn delete(&self, id: Uuid) -> Result<Value, ClientError> {
        let path = format!("{}/{}", paths::CONNECTIONS, id);
        self.client.delete(&path).await
    }

    /// Probe the connection's credentials against the provider.
    pub async fn test(&self, id: Uuid) -> Result<Value, ClientError> {
        let path = format!("{}/{}/test", paths::CONNECTIONS, id);
        self.client.post_empty(&path).await
    }

    /// Refresh the connection's provider credentials.
    pub async fn refresh(&self, id: Uuid) -> Result<Value, ClientError> {
        let path = format!("{}/{}/refresh", paths::CONNECTIONS, id);
        self.client.post_empty(&path).await
    }
}
