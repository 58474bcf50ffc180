//! Remote task store backed by a JSON-over-HTTP task API.
//!
//! Routes (relative to the base URL, e.g. `http://localhost:8000/api`):
//! - `GET /tasks`, `POST /tasks`
//! - `GET /tasks/{id}`, `PUT /tasks/{id}`, `DELETE /tasks/{id}`
//!
//! Scoring and ID assignment belong to the backend; this client only checks
//! field bounds locally so bad input fails the same way it does in the local store.

use super::{check_new_task, check_update, StoreError, TaskStore};
use crate::model::{NewTask, Priority, Task, TaskId, TaskUpdate};
use crate::validator::validate_id;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct RemoteTaskStore {
    base_url: String,
    client: Client,
}

/// Error body returned by task backends (`{"detail": "..."}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

impl RemoteTaskStore {
    /// Create a client with the default 10 second timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, StoreError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, StoreError> {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn task_url(&self, id: TaskId) -> String {
        format!("{}/tasks/{}", self.base_url, id)
    }

    /// Map a non-success response to a store error. `id` enables the 404 mapping.
    async fn error_for(response: Response, id: Option<TaskId>) -> StoreError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return StoreError::NotFound(id);
            }
        }
        if status == StatusCode::UNPROCESSABLE_ENTITY {
            if let Ok(body) = serde_json::from_str::<ErrorBody>(&text) {
                if body.detail == StoreError::InvalidTitle.to_string() {
                    return StoreError::InvalidTitle;
                }
                if body.detail == StoreError::InvalidDescription.to_string() {
                    return StoreError::InvalidDescription;
                }
            }
        }
        StoreError::Api {
            status: status.as_u16(),
            message: text,
        }
    }

    async fn decode<T: DeserializeOwned>(
        response: Response,
        id: Option<TaskId>,
    ) -> Result<T, StoreError> {
        if !response.status().is_success() {
            return Err(Self::error_for(response, id).await);
        }
        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| StoreError::Decode(format!("{}, body: {}", e, text)))
    }
}

#[async_trait]
impl TaskStore for RemoteTaskStore {
    fn is_remote(&self) -> bool {
        true
    }

    async fn create(
        &self,
        title: &str,
        description: &str,
        priority: Priority,
    ) -> Result<Task, StoreError> {
        check_new_task(title, description)?;

        let body = NewTask::new(title, description, priority);
        let response = self.client.post(self.tasks_url()).json(&body).send().await?;
        let task: Task = Self::decode(response, None).await?;
        tracing::debug!("Backend created task {}", task.id);
        Ok(task)
    }

    async fn get_all(&self) -> Result<Vec<Task>, StoreError> {
        let response = self.client.get(self.tasks_url()).send().await?;
        Self::decode(response, None).await
    }

    async fn get_by_id(&self, id: TaskId) -> Result<Task, StoreError> {
        if !validate_id(id) {
            return Err(StoreError::NotFound(id));
        }
        let response = self.client.get(self.task_url(id)).send().await?;
        Self::decode(response, Some(id)).await
    }

    async fn update(&self, id: TaskId, update: &TaskUpdate) -> Result<Task, StoreError> {
        // Same order as the local store: field checks, then existence.
        check_update(update)?;
        if !validate_id(id) {
            return Err(StoreError::NotFound(id));
        }

        let response = self
            .client
            .put(self.task_url(id))
            .json(update)
            .send()
            .await?;
        Self::decode(response, Some(id)).await
    }

    async fn delete(&self, id: TaskId) -> Result<(), StoreError> {
        if !validate_id(id) {
            return Err(StoreError::NotFound(id));
        }
        let response = self.client.delete(self.task_url(id)).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_for(response, Some(id)).await);
        }
        Ok(())
    }
}
