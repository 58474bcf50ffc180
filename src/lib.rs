//! # Task Manager
//!
//! Task-management client with a local in-memory store and an optional
//! remote HTTP backend.
//!
//! This library provides:
//! - An in-memory task store with CRUD, filtering and statistics
//! - A REST client implementing the same operations against a task backend
//! - A priority-score heuristic that biases a new task's priority
//! - An HTTP server exposing any store over the task API
//!
//! ## Architecture
//!
//! ```text
//!        ┌──────────────────────────────────┐
//!        │          TaskController          │
//!        │  (store chosen at construction)  │
//!        └────────────────┬─────────────────┘
//!                         │ dyn TaskStore
//!            ┌────────────┴────────────┐
//!            ▼                         ▼
//!   ┌─────────────────┐       ┌─────────────────┐
//!   │ InMemoryTask    │       │ RemoteTask      │
//!   │ Store           │       │ Store (reqwest) │
//!   └─────────────────┘       └─────────────────┘
//! ```
//!
//! ## Modules
//! - `model`: Task, Priority, update payloads, statistics
//! - `scoring`: numeric helpers and the priority-score policy
//! - `validator`: title/description/ID bounds
//! - `store`: the `TaskStore` trait and its backends
//! - `controller`: facade over the configured store
//! - `api`: axum server for the task API

pub mod api;
pub mod config;
pub mod controller;
pub mod model;
pub mod scoring;
pub mod store;
pub mod validator;

pub use config::Config;
pub use controller::TaskController;
pub use model::{NewTask, Priority, Task, TaskId, TaskStatistics, TaskUpdate};
pub use store::{InMemoryTaskStore, RemoteTaskStore, StoreError, TaskStore, TaskStoreType};
