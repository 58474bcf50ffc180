//! Task storage with pluggable backends.
//!
//! Supports:
//! - `local`: In-memory store that owns the tasks (non-persistent)
//! - `remote`: JSON-over-HTTP client against a task backend

mod error;
mod memory;
mod remote;

pub use error::StoreError;
pub use memory::InMemoryTaskStore;
pub use remote::{RemoteTaskStore, DEFAULT_API_URL, DEFAULT_TIMEOUT};

use async_trait::async_trait;

use crate::config::Config;
use crate::model::{Priority, Task, TaskId, TaskStatistics, TaskUpdate};
use crate::validator::{validate_description, validate_title};

/// Task store trait - implemented by all storage backends.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Whether operations go over the network.
    fn is_remote(&self) -> bool;

    /// Create a task. The store assigns the ID.
    async fn create(
        &self,
        title: &str,
        description: &str,
        priority: Priority,
    ) -> Result<Task, StoreError>;

    /// All tasks in insertion order.
    async fn get_all(&self) -> Result<Vec<Task>, StoreError>;

    async fn get_by_id(&self, id: TaskId) -> Result<Task, StoreError>;

    /// Overwrite the fields present in `update`. Nothing changes on error.
    async fn update(&self, id: TaskId, update: &TaskUpdate) -> Result<Task, StoreError>;

    async fn delete(&self, id: TaskId) -> Result<(), StoreError>;

    /// Tasks with the given priority, in insertion order.
    async fn filter_by_priority(&self, priority: Priority) -> Result<Vec<Task>, StoreError> {
        let tasks = self.get_all().await?;
        Ok(tasks.into_iter().filter(|t| t.priority == priority).collect())
    }

    /// Completed tasks, in insertion order.
    async fn completed(&self) -> Result<Vec<Task>, StoreError> {
        let tasks = self.get_all().await?;
        Ok(tasks.into_iter().filter(|t| t.completed).collect())
    }

    /// Recomputed on every call.
    async fn statistics(&self) -> Result<TaskStatistics, StoreError> {
        let tasks = self.get_all().await?;
        Ok(TaskStatistics::from_tasks(&tasks))
    }
}

/// Check the fields of a new task.
pub(crate) fn check_new_task(title: &str, description: &str) -> Result<(), StoreError> {
    if !validate_title(title) {
        return Err(StoreError::InvalidTitle);
    }
    if !validate_description(description) {
        return Err(StoreError::InvalidDescription);
    }
    Ok(())
}

/// Check every supplied field of an update before any of them is applied.
pub(crate) fn check_update(update: &TaskUpdate) -> Result<(), StoreError> {
    if let Some(title) = &update.title {
        if !validate_title(title) {
            return Err(StoreError::InvalidTitle);
        }
    }
    if let Some(description) = &update.description {
        if !validate_description(description) {
            return Err(StoreError::InvalidDescription);
        }
    }
    Ok(())
}

/// Task store type selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStoreType {
    #[default]
    Local,
    Remote,
}

impl TaskStoreType {
    /// Parse from environment variable value.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "remote" | "http" | "api" => Self::Remote,
            "local" | "memory" => Self::Local,
            _ => Self::default(),
        }
    }
}

/// Create a task store based on configuration.
pub fn create_task_store(config: &Config) -> Result<Box<dyn TaskStore>, StoreError> {
    match config.store_type {
        TaskStoreType::Local => Ok(Box::new(InMemoryTaskStore::new())),
        TaskStoreType::Remote => {
            let store = RemoteTaskStore::with_timeout(&config.api_url, config.api_timeout)?;
            Ok(Box::new(store))
        }
    }
}
