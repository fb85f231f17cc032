//! Task endpoints on the actions service.

use serde_json::Value;

use super::decode;
use crate::client::ApiClient;
use crate::error::ClientError;
use crate::paths;
use crate::query::QueryString;
use crate::types::{MessageRecord, Page, Task, TaskCreate, TaskFilter, TaskUpdate};

/// Task endpoints. Obtained from [`ApiClient::tasks`].
///
/// The actions service keys tasks by integer id; the classification
/// service's generated tasks live under [`super::ClassificationApi`].
pub struct TasksApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl TasksApi<'_> {
    pub async fn list(&self, filter: TaskFilter) -> Result<Page<Task>, ClientError> {
        let mut query = QueryString::new();
        query.push_opt("user_id", filter.user_id);
        query.push_opt("status", filter.status);
        query.push_opt("priority", filter.priority);
        let path = query.append_to(paths::ACTION_TASKS);
        decode("task list", self.client.get(&path).await?)
    }

    pub async fn get(&self, id: i64) -> Result<Task, ClientError> {
        let path = format!("{}/{}", paths::ACTION_TASKS, id);
        decode("task", self.client.get(&path).await?)
    }

    pub async fn create(&self, request: TaskCreate) -> Result<Task, ClientError> {
        let body = serde_json::to_value(&request)?;
        decode(
            "created task",
            self.client.post(paths::ACTION_TASKS, body).await?,
        )
    }

    pub async fn update(&self, id: i64, request: TaskUpdate) -> Result<Task, ClientError> {
        let path = format!("{}/{}", paths::ACTION_TASKS, id);
        let body = serde_json::to_value(&request)?;
        decode("updated task", self.client.put(&path, body).await?)
    }

    /// Delete a task; returns the service's deletion summary.
    pub async fn delete(&self, id: i64) -> Result<Value, ClientError> {
        let path = format!("{}/{}", paths::ACTION_TASKS, id);
        self.client.delete(&path).await
    }

    /// Create tasks from a batch of synced messages.
    pub async fn create_from_messages(
        &self,
        messages: &[MessageRecord],
        user_id: i64,
    ) -> Result<Vec<Task>, ClientError> {
        let mut query = QueryString::new();
        query.push("user_id", user_id);
        let path = query.append_to(&format!("{}/batch", paths::ACTION_TASKS));
        let body = serde_json::to_value(messages)?;
        decode("created tasks", self.client.post(&path, body).await?)
    }
}
