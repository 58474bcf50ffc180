//! Task data model shared by every store backend.

mod priority;
mod task;

pub use priority::Priority;
pub use task::{NewTask, Task, TaskId, TaskStatistics, TaskUpdate};
