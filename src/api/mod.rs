//! HTTP API for the task manager.
//!
//! ## Endpoints
//!
//! - `GET /` - Banner
//! - `GET /api/health` - Health check
//! - `GET /api/tasks` - List tasks (`?priority=high`, `?completed=true`)
//! - `POST /api/tasks` - Create a task
//! - `GET /api/tasks/stats` - Task statistics
//! - `GET /api/tasks/{id}` - Get a task
//! - `PUT /api/tasks/{id}` - Partially update a task
//! - `DELETE /api/tasks/{id}` - Delete a task

mod routes;
mod tasks;

pub use routes::{router, serve, AppState};
pub use tasks::ListTasksQuery;
