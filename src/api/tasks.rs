//! Task API endpoints.
//!
//! Request and response bodies use the same JSON shapes the remote store
//! sends and expects, so a `RemoteTaskStore` can talk to this server.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use super::routes::AppState;
use crate::model::{NewTask, Priority, Task, TaskId, TaskStatistics, TaskUpdate};
use crate::store::StoreError;

type ApiError = (StatusCode, Json<Value>);

/// Create task routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/stats", get(get_statistics))
        .route("/:id", get(get_task).put(update_task).delete(delete_task))
}

#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
}

/// Map a store error onto a status code and a `{"detail": ...}` body.
fn api_error(e: StoreError) -> ApiError {
    let status = match &e {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::InvalidTitle | StoreError::InvalidDescription => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        StoreError::Transport(_) | StoreError::Api { .. } | StoreError::Decode(_) => {
            tracing::warn!("Backing store failed: {}", e);
            StatusCode::BAD_GATEWAY
        }
    };
    (status, Json(json!({ "detail": e.to_string() })))
}

/// GET /api/tasks - List tasks, optionally filtered by `priority` and `completed`.
async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let controller = &state.controller;
    let mut tasks = match query.priority {
        Some(priority) => controller.get_tasks_by_priority(priority).await,
        None => controller.get_all_tasks().await,
    }
    .map_err(api_error)?;

    if let Some(completed) = query.completed {
        tasks.retain(|t| t.completed == completed);
    }
    Ok(Json(tasks))
}

/// POST /api/tasks - Create a task.
async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewTask>,
) -> Result<Json<Task>, ApiError> {
    let task = state
        .controller
        .create_task(&req.title, &req.description, req.priority)
        .await
        .map_err(api_error)?;
    Ok(Json(task))
}

/// GET /api/tasks/stats - Task statistics.
async fn get_statistics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TaskStatistics>, ApiError> {
    let stats = state.controller.get_statistics().await.map_err(api_error)?;
    Ok(Json(stats))
}

/// GET /api/tasks/:id - Get a single task.
async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TaskId>,
) -> Result<Json<Task>, ApiError> {
    let task = state.controller.get_task(id).await.map_err(api_error)?;
    Ok(Json(task))
}

/// PUT /api/tasks/:id - Apply a partial update.
async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TaskId>,
    Json(update): Json<TaskUpdate>,
) -> Result<Json<Task>, ApiError> {
    let task = state
        .controller
        .update_task(id, &update)
        .await
        .map_err(api_error)?;
    Ok(Json(task))
}

/// DELETE /api/tasks/:id - Delete a task.
async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TaskId>,
) -> Result<Json<Value>, ApiError> {
    state.controller.delete_task(id).await.map_err(api_error)?;
    Ok(Json(json!({ "message": "Task deleted successfully" })))
}
