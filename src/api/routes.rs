//! HTTP route wiring and server startup.

use std::sync::Arc;

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::tasks as tasks_api;
use crate::config::Config;
use crate::controller::TaskController;

/// Shared application state.
pub struct AppState {
    pub controller: TaskController,
}

impl AppState {
    pub fn new(controller: TaskController) -> Arc<Self> {
        Arc::new(Self { controller })
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    remote_store: bool,
}

/// Build the application router over `state`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health))
        .nest("/api/tasks", tasks_api::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server and run until Ctrl+C / SIGTERM.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let controller = TaskController::from_config(&config)?;
    let app = router(AppState::new(controller));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Task Manager API" }))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        remote_store: state.controller.is_remote(),
    })
}
