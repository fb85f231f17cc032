//! Synced message endpoints.

use serde_json::Value;
use uuid::Uuid;

use super::decode;
use crate::client::ApiClient;
use crate::error::ClientError;
use crate::paths;
use crate::query::QueryString;
use crate::types::{MessageCreate, MessageFilter, MessageRecord, MessageUpdate, Page};

/// Message endpoints on the integrations service. Obtained from
/// [`ApiClient::messages`].
pub struct MessagesApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl MessagesApi<'_> {
    pub async fn list(&self, filter: MessageFilter) -> Result<Page<MessageRecord>, ClientError> {
        let mut query = QueryString::new();
        query.push_opt("skip", filter.skip);
        query.push_opt("limit", filter.limit);
        query.push_opt("search", filter.search.as_deref());
        query.push_opt("thread_id", filter.thread_id.as_deref());
        let path = query.append_to(paths::MESSAGES);
        decode("message list", self.client.get(&path).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<MessageRecord, ClientError> {
        let path = format!("{}/{}", paths::MESSAGES, id);
        decode("message", self.client.get(&path).await?)
    }

    pub async fn create(&self, request: MessageCreate) -> Result<MessageRecord, ClientError> {
        let body = serde_json::to_value(&request)?;
        decode(
            "created message",
            self.client.post(paths::MESSAGES, body).await?,
        )
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: MessageUpdate,
    ) -> Result<MessageRecord, ClientError> {
        let path = format!("{}/{}", paths::MESSAGES, id);
        let body = serde_json::to_value(&request)?;
        decode("updated message", self.client.patch(&path, body).await?)
    }

    /// Delete one message; returns the service's deletion summary.
    pub async fn delete(&self, id: Uuid) -> Result<Value, ClientError> {
        let path = format!("{}/{}", paths::MESSAGES, id);
        self.client.delete(&path).await
    }

    /// Delete several messages at once. The service expects the ids as
    /// repeated `message_ids` query parameters.
    pub async fn bulk_delete(&self, message_ids: &[Uuid]) -> Result<Value, ClientError> {
        let mut query = QueryString::new();
        for id in message_ids {
            query.push("message_ids", id);
        }
        self.client.delete(&query.append_to(paths::MESSAGES)).await
    }
}
