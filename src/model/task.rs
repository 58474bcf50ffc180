//! Task records and the payloads used to create or update them.
//!
//! # Invariants
//! - `id` is strictly positive and unique within a store
//! - `title` is 1..=200 characters for any task accepted by a store
//! - `description` is at most 1000 characters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::priority::Priority;

/// Identifier assigned by a store. Positive for every stored task.
pub type TaskId = i64;

/// A unit of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    /// Set by the local store; remote backends may leave it out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Apply the fields present in `update`, leaving the others untouched.
    ///
    /// Does not validate; callers check the update first.
    pub fn apply(&mut self, update: &TaskUpdate) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
    }
}

/// Create payload sent to a remote backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
}

impl NewTask {
    pub fn new(title: impl Into<String>, description: impl Into<String>, priority: Priority) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            completed: false,
            priority,
        }
    }
}

/// Partial update. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl TaskUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
    }
}

/// Counts derived from a store's current contents.
///
/// # Invariants
/// - `pending_tasks == total_tasks - completed_tasks`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatistics {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    /// `factorial(total_tasks)`, or `None` once it no longer fits in 64 bits.
    pub factorial_total: Option<u64>,
}

impl TaskStatistics {
    /// Compute statistics over a slice of tasks.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total_tasks = tasks.len();
        let completed_tasks = tasks.iter().filter(|t| t.completed).count();
        Self {
            total_tasks,
            completed_tasks,
            pending_tasks: total_tasks - completed_tasks,
            factorial_total: crate::scoring::factorial(total_tasks as i64).ok(),
        }
    }
}
