//! Task controller: the single entry point callers use for task operations.
//!
//! The backing store is chosen once at construction; every call is forwarded
//! to it and its errors are returned unchanged.

use crate::config::Config;
use crate::model::{Priority, Task, TaskId, TaskStatistics, TaskUpdate};
use crate::store::{create_task_store, StoreError, TaskStore};

pub struct TaskController {
    store: Box<dyn TaskStore>,
}

impl TaskController {
    pub fn new(store: Box<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// Build a controller over the store selected by `config.store_type`.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        let store = create_task_store(config)?;
        tracing::info!(
            "Task controller using {} store",
            if store.is_remote() { "remote" } else { "local" }
        );
        Ok(Self::new(store))
    }

    pub fn is_remote(&self) -> bool {
        self.store.is_remote()
    }

    pub async fn create_task(
        &self,
        title: &str,
        description: &str,
        priority: Priority,
    ) -> Result<Task, StoreError> {
        self.store.create(title, description, priority).await
    }

    pub async fn get_all_tasks(&self) -> Result<Vec<Task>, StoreError> {
        self.store.get_all().await
    }

    pub async fn get_task(&self, id: TaskId) -> Result<Task, StoreError> {
        self.store.get_by_id(id).await
    }

    pub async fn update_task(&self, id: TaskId, update: &TaskUpdate) -> Result<Task, StoreError> {
        self.store.update(id, update).await
    }

    pub async fn delete_task(&self, id: TaskId) -> Result<(), StoreError> {
        self.store.delete(id).await
    }

    pub async fn get_tasks_by_priority(&self, priority: Priority) -> Result<Vec<Task>, StoreError> {
        self.store.filter_by_priority(priority).await
    }

    pub async fn get_completed_tasks(&self) -> Result<Vec<Task>, StoreError> {
        self.store.completed().await
    }

    pub async fn get_statistics(&self) -> Result<TaskStatistics, StoreError> {
        self.store.statistics().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryTaskStore;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_controller_forwards_to_local_store() {
        let controller = TaskController::new(Box::new(InMemoryTaskStore::new()));
        assert!(!controller.is_remote());

        let task = assert_ok!(
            controller
                .create_task("Review code changes", "Review all pending code changes", Priority::Medium)
                .await
        );
        assert_eq!(task.id, 1);
        assert_eq!(controller.get_task(1).await, Ok(task));
        assert_eq!(controller.get_all_tasks().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_controller_propagates_store_errors_unchanged() {
        let controller = TaskController::new(Box::new(InMemoryTaskStore::new()));

        let err = assert_err!(controller.create_task("", "", Priority::Low).await);
        assert_eq!(err, StoreError::InvalidTitle);

        let err = assert_err!(controller.delete_task(9).await);
        assert_eq!(err, StoreError::NotFound(9));

        let err = assert_err!(
            controller
                .update_task(9, &TaskUpdate::new().with_completed(true))
                .await
        );
        assert_eq!(err, StoreError::NotFound(9));
    }

    #[tokio::test]
    async fn test_controller_queries() {
        let controller = TaskController::from_config(&Config::default()).unwrap();
        controller
            .create_task("Review code changes", "", Priority::Medium)
            .await
            .unwrap();
        controller
            .create_task("Write docs", "", Priority::Medium)
            .await
            .unwrap();
        controller
            .update_task(2, &TaskUpdate::new().with_completed(true))
            .await
            .unwrap();

        let medium = controller.get_tasks_by_priority(Priority::Medium).await.unwrap();
        assert_eq!(medium.len(), 1);
        assert!(controller
            .get_tasks_by_priority(Priority::High)
            .await
            .unwrap()
            .is_empty());

        let completed = controller.get_completed_tasks().await.unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, 2);

        let stats = controller.get_statistics().await.unwrap();
        assert_eq!(stats.total_tasks, 2);
        assert_eq!(stats.completed_tasks, 1);
        assert_eq!(stats.pending_tasks, 1);
        assert_eq!(stats.factorial_total, Some(2));
    }
}
