//! Classification endpoints: message intake, classifications, daily briefs
//! and the tasks generated from classifications.
//!
//! Unlike the integrations service, the classification service returns its
//! lists as bare arrays rather than paginated envelopes.

use serde_json::Value;
use uuid::Uuid;

use super::decode;
use crate::client::ApiClient;
use crate::error::ClientError;
use crate::paths;
use crate::query::QueryString;
use crate::types::{
    Brief, BriefFilter, BriefRequest, Classification, ClassificationFilter,
    ClassificationMessageFilter, ClassificationOutcome, ClassificationUpdate, ClassifyRequest,
    GeneratedTask, GeneratedTaskCreate, GeneratedTaskFilter, GeneratedTaskUpdate, MessageCreate,
    MessageRecord, Page, TaskGenerationOutcome, TaskGenerationRequest,
};

/// Classification endpoints. Obtained from [`ApiClient::classification`].
pub struct ClassificationApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ClassificationApi<'_> {
    // ── Messages (shared path with the integrations service) ─────────

    pub async fn list_messages(
        &self,
        filter: ClassificationMessageFilter,
    ) -> Result<Page<MessageRecord>, ClientError> {
        let mut query = QueryString::new();
        query.push_opt("channel", filter.channel.as_deref());
        query.push_opt("sender", filter.sender.as_deref());
        query.push_opt("limit", filter.limit);
        let path = query.append_to(paths::MESSAGES);
        decode("message list", self.client.get(&path).await?)
    }

    pub async fn get_message(&self, id: Uuid) -> Result<MessageRecord, ClientError> {
        let path = format!("{}/{}", paths::MESSAGES, id);
        decode("message", self.client.get(&path).await?)
    }

    pub async fn create_message(
        &self,
        request: MessageCreate,
    ) -> Result<MessageRecord, ClientError> {
        let body = serde_json::to_value(&request)?;
        decode(
            "created message",
            self.client.post(paths::MESSAGES, body).await?,
        )
    }

    // ── Classifications ──────────────────────────────────────────────

    pub async fn list(
        &self,
        filter: ClassificationFilter,
    ) -> Result<Vec<Classification>, ClientError> {
        let mut query = QueryString::new();
        query.push_opt("label", filter.label.as_deref());
        query.push_opt("min_priority", filter.min_priority);
        query.push_opt("max_priority", filter.max_priority);
        let path = query.append_to(paths::CLASSIFICATIONS);
        decode("classification list", self.client.get(&path).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Classification, ClientError> {
        let path = format!("{}/{}", paths::CLASSIFICATIONS, id);
        decode("classification", self.client.get(&path).await?)
    }

    /// Classify a batch of messages.
    pub async fn classify(
        &self,
        request: ClassifyRequest,
    ) -> Result<ClassificationOutcome, ClientError> {
        let body = serde_json::to_value(&request)?;
        decode(
            "classification outcome",
            self.client.post(paths::CLASSIFICATIONS, body).await?,
        )
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: ClassificationUpdate,
    ) -> Result<Classification, ClientError> {
        let path = format!("{}/{}", paths::CLASSIFICATIONS, id);
        let body = serde_json::to_value(&request)?;
        decode("updated classification", self.client.put(&path, body).await?)
    }

    /// Delete a classification; returns the service's deletion summary.
    pub async fn delete(&self, id: Uuid) -> Result<Value, ClientError> {
        let path = format!("{}/{}", paths::CLASSIFICATIONS, id);
        self.client.delete(&path).await
    }

    // ── Briefs ───────────────────────────────────────────────────────

    pub async fn list_briefs(&self, filter: BriefFilter) -> Result<Vec<Brief>, ClientError> {
        let mut query = QueryString::new();
        query.push_opt("user_id", filter.user_id);
        query.push_opt("brief_date", filter.brief_date);
        let path = query.append_to(paths::BRIEFS);
        decode("brief list", self.client.get(&path).await?)
    }

    pub async fn get_brief(&self, id: Uuid) -> Result<Brief, ClientError> {
        let path = format!("{}/{}", paths::BRIEFS, id);
        decode("brief", self.client.get(&path).await?)
    }

    /// Generate a brief for a user and day.
    pub async fn create_brief(&self, request: BriefRequest) -> Result<Brief, ClientError> {
        let body = serde_json::to_value(&request)?;
        decode("created brief", self.client.post(paths::BRIEFS, body).await?)
    }

    /// Delete a brief; returns the service's deletion summary.
    pub async fn delete_brief(&self, id: Uuid) -> Result<Value, ClientError> {
        let path = format!("{}/{}", paths::BRIEFS, id);
        self.client.delete(&path).await
    }

    // ── Generated tasks ──────────────────────────────────────────────

    pub async fn list_tasks(
        &self,
        filter: GeneratedTaskFilter,
    ) -> Result<Vec<GeneratedTask>, ClientError> {
        let mut query = QueryString::new();
        query.push_opt("user_id", filter.user_id);
        query.push_opt("status", filter.status.as_deref());
        query.push_opt("priority", filter.priority);
        query.push_opt("limit", filter.limit);
        let path = query.append_to(paths::CLASSIFICATION_TASKS);
        decode("generated task list", self.client.get(&path).await?)
    }

    pub async fn get_task(&self, id: Uuid) -> Result<GeneratedTask, ClientError> {
        let path = format!("{}/{}", paths::CLASSIFICATION_TASKS, id);
        decode("generated task", self.client.get(&path).await?)
    }

    pub async fn create_task(
        &self,
        request: GeneratedTaskCreate,
    ) -> Result<GeneratedTask, ClientError> {
        let body = serde_json::to_value(&request)?;
        decode(
            "created generated task",
            self.client.post(paths::CLASSIFICATION_TASKS, body).await?,
        )
    }

    pub async fn update_task(
        &self,
        id: Uuid,
        request: GeneratedTaskUpdate,
    ) -> Result<GeneratedTask, ClientError> {
        let path = format!("{}/{}", paths::CLASSIFICATION_TASKS, id);
        let body = serde_json::to_value(&request)?;
        decode("updated generated task", self.client.put(&path, body).await?)
    }

    /// Delete a generated task; returns the service's deletion summary.
    pub async fn delete_task(&self, id: Uuid) -> Result<Value, ClientError> {
        let path = format!("{}/{}", paths::CLASSIFICATION_TASKS, id);
        self.client.delete(&path).await
    }

    /// Generate tasks from existing classifications.
    pub async fn generate_tasks(
        &self,
        request: TaskGenerationRequest,
    ) -> Result<TaskGenerationOutcome, ClientError> {
        let path = format!("{}/generate", paths::CLASSIFICATION_TASKS);
        let body = serde_json::to_value(&request)?;
        decode("task generation outcome", self.client.post(&path, body).await?)
    }
}
