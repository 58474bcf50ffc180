//! In-memory task store (non-persistent).
//!
//! This is the authoritative local store: it assigns IDs, applies the
//! priority-score policy on create, and keeps tasks in insertion order.

use super::{check_new_task, check_update, StoreError, TaskStore};
use crate::model::{Priority, Task, TaskId, TaskStatistics, TaskUpdate};
use crate::scoring::{adjust_priority, priority_score};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of tasks currently held.
    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

/// `max(id) + 1`, or 1 for an empty store.
fn next_id(tasks: &[Task]) -> TaskId {
    tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    fn is_remote(&self) -> bool {
        false
    }

    async fn create(
        &self,
        title: &str,
        description: &str,
        priority: Priority,
    ) -> Result<Task, StoreError> {
        check_new_task(title, description)?;

        let score = priority_score(title, description);
        let adjusted = adjust_priority(priority, score);

        let mut tasks = self.tasks.write().await;
        let now = Utc::now();
        let task = Task {
            id: next_id(&tasks),
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
            priority: adjusted,
            created_at: Some(now),
            updated_at: Some(now),
        };
        tasks.push(task.clone());

        tracing::debug!(
            "Created task {} (score={}, requested={}, priority={})",
            task.id,
            score,
            priority,
            adjusted
        );
        Ok(task)
    }

    async fn get_all(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.tasks.read().await.clone())
    }

    async fn get_by_id(&self, id: TaskId) -> Result<Task, StoreError> {
        self.tasks
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: TaskId, update: &TaskUpdate) -> Result<Task, StoreError> {
        check_update(update)?;

        let mut tasks = self.tasks.write().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        if update.is_empty() {
            return Ok(task.clone());
        }

        task.apply(update);
        task.updated_at = Some(Utc::now());
        tracing::debug!("Updated task {}", id);
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> Result<(), StoreError> {
        let mut tasks = self.tasks.write().await;
        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        // `remove` shifts the tail, keeping relative order.
        tasks.remove(index);
        tracing::debug!("Deleted task {}", id);
        Ok(())
    }

    async fn filter_by_priority(&self, priority: Priority) -> Result<Vec<Task>, StoreError> {
        Ok(self
            .tasks
            .read()
            .await
            .iter()
            .filter(|t| t.priority == priority)
            .cloned()
            .collect())
    }

    async fn statistics(&self) -> Result<TaskStatistics, StoreError> {
        Ok(TaskStatistics::from_tasks(&self.tasks.read().await))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store_with(titles: &[&str]) -> InMemoryTaskStore {
        let store = InMemoryTaskStore::new();
        for title in titles {
            store
                .create(title, "", Priority::Medium)
                .await
                .expect("Failed to create task");
        }
        store
    }

    #[tokio::test]
    async fn test_empty_title_rejected_without_state_change() {
        let store = store_with(&["Existing"]).await;

        let result = store.create("", "no title", Priority::Medium).await;

        assert_eq!(result, Err(StoreError::InvalidTitle));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_overlong_description_rejected() {
        let store = InMemoryTaskStore::new();
        let result = store
            .create("Title", &"d".repeat(1001), Priority::Medium)
            .await;
        assert_eq!(result, Err(StoreError::InvalidDescription));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_ids_are_sequential_from_one() {
        let store = store_with(&["One", "Two", "Three"]).await;
        let ids: Vec<TaskId> = store.get_all().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_new_task_defaults() {
        let store = InMemoryTaskStore::new();
        let task = store
            .create("Review code changes", "Review all pending code changes", Priority::Medium)
            .await
            .unwrap();
        assert!(!task.completed);
        assert!(task.created_at.is_some());
        assert_eq!(task.created_at, task.updated_at);
    }

    #[tokio::test]
    async fn test_delete_preserves_order_and_next_id_exceeds_max() {
        let store = store_with(&["First", "Second", "Third"]).await;

        store.delete(2).await.expect("Failed to delete task");

        let tasks = store.get_all().await.unwrap();
        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Third"]);

        let fourth = store.create("Fourth", "", Priority::Medium).await.unwrap();
        assert!(fourth.id > 3, "New ID {} should exceed surviving max 3", fourth.id);
    }

    #[tokio::test]
    async fn test_next_id_after_deleting_the_newest() {
        let store = store_with(&["First", "Second"]).await;
        store.delete(2).await.unwrap();
        let task = store.create("Again", "", Priority::Medium).await.unwrap();
        assert_eq!(task.id, 2);
    }

    #[tokio::test]
    async fn test_missing_ids_report_not_found() {
        let store = store_with(&["Only"]).await;
        assert_eq!(store.get_by_id(42).await, Err(StoreError::NotFound(42)));
        assert_eq!(store.delete(42).await, Err(StoreError::NotFound(42)));
        assert_eq!(
            store.update(42, &TaskUpdate::new().with_completed(true)).await,
            Err(StoreError::NotFound(42))
        );
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_urgent_task_at_exact_threshold_keeps_requested_priority() {
        let store = InMemoryTaskStore::new();
        // 15 chars -> 5! % 50 = 20, plus 30 for "urgent" = 50 (not above 50)
        let task = store
            .create("Urgent: fix it!", "", Priority::Medium)
            .await
            .unwrap();
        assert_eq!(task.priority, Priority::Medium);
    }

    #[tokio::test]
    async fn test_high_score_promotes_to_high() {
        let store = InMemoryTaskStore::new();
        // 24 chars -> 4! = 24, plus 30 for "urgent" = 54
        let task = store
            .create(
                "Urgent: Fix critical bug",
                "Fix the critical bug in production",
                Priority::Medium,
            )
            .await
            .unwrap();
        assert_eq!(task.priority, Priority::High);
    }

    #[tokio::test]
    async fn test_low_score_demotes_to_low() {
        let store = InMemoryTaskStore::new();
        // 30 chars -> 0! = 1, no keywords
        let task = store
            .create(
                "Complete project documentation",
                "Write comprehensive documentation for the project",
                Priority::High,
            )
            .await
            .unwrap();
        assert_eq!(task.priority, Priority::Low);
    }

    #[tokio::test]
    async fn test_update_overwrites_only_supplied_fields() {
        let store = store_with(&["Review code changes"]).await;
        let before = store.get_by_id(1).await.unwrap();

        let updated = store
            .update(
                1,
                &TaskUpdate::new()
                    .with_title("Review code changes (Updated)")
                    .with_completed(true),
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Review code changes (Updated)");
        assert!(updated.completed);
        assert_eq!(updated.description, before.description);
        assert_eq!(updated.priority, before.priority);
        assert!(updated.updated_at >= before.updated_at);
        assert_eq!(store.get_by_id(1).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_invalid_update_applies_nothing() {
        let store = store_with(&["Keep me"]).await;
        let before = store.get_by_id(1).await.unwrap();

        let result = store
            .update(
                1,
                &TaskUpdate::new()
                    .with_title("")
                    .with_completed(true)
                    .with_priority(Priority::High),
            )
            .await;

        assert_eq!(result, Err(StoreError::InvalidTitle));
        assert_eq!(store.get_by_id(1).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_invalid_update_of_missing_task_reports_invalid_title() {
        let store = store_with(&["Only"]).await;
        assert_eq!(
            store.update(5, &TaskUpdate::new().with_title("")).await,
            Err(StoreError::InvalidTitle)
        );
    }

    #[tokio::test]
    async fn test_empty_update_leaves_task_untouched() {
        let store = store_with(&["Only"]).await;
        let before = store.get_by_id(1).await.unwrap();

        let after = store.update(1, &TaskUpdate::new()).await.unwrap();

        assert_eq!(after, before);
        assert_eq!(after.updated_at, before.updated_at);
    }

    #[tokio::test]
    async fn test_filter_by_priority() {
        let store = InMemoryTaskStore::new();
        store.create("Write docs", "", Priority::Medium).await.unwrap(); // demoted to low
        store.create("Review code changes", "", Priority::Medium).await.unwrap(); // stays medium
        store.create("Tidy", "", Priority::Low).await.unwrap();

        let low = store.filter_by_priority(Priority::Low).await.unwrap();
        let titles: Vec<&str> = low.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Write docs", "Tidy"]);

        let high = store.filter_by_priority(Priority::High).await.unwrap();
        assert!(high.is_empty());
    }

    #[tokio::test]
    async fn test_completed_tasks() {
        let store = store_with(&["One", "Two", "Three"]).await;
        store
            .update(3, &TaskUpdate::new().with_completed(true))
            .await
            .unwrap();
        let done = store.completed().await.unwrap();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, 3);
    }

    #[tokio::test]
    async fn test_statistics() {
        let store = InMemoryTaskStore::new();
        let stats = store.statistics().await.unwrap();
        assert_eq!(stats.total_tasks, 0);
        assert_eq!(stats.completed_tasks, 0);
        assert_eq!(stats.pending_tasks, 0);
        assert_eq!(stats.factorial_total, Some(1));

        let store = store_with(&["One", "Two", "Three", "Four"]).await;
        store
            .update(2, &TaskUpdate::new().with_completed(true))
            .await
            .unwrap();
        let stats = store.statistics().await.unwrap();
        assert_eq!(stats.total_tasks, 4);
        assert_eq!(stats.completed_tasks, 1);
        assert_eq!(stats.pending_tasks, 3);
        assert_eq!(stats.factorial_total, Some(24));
    }
}
