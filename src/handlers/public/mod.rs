// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Service info, health probe and token acquisition.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::database::DatabaseManager;

pub mod auth;

/// GET / - service information
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "Todo Manager API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": "/auth/signup, /auth/signin (public)",
            "todos": "/todos[/:todo_id] (protected)",
            "managers": "/todos/:todo_id/managers[/:manager_id] (protected)",
            "comments": "/todos/:todo_id/comments (protected)",
            "users": "/users[/:user_id] (protected)",
            "admin": "/admin/comments/:comment_id, /admin/users/:user_id (ADMIN role)",
        }
    }))
}

/// GET /health - database ping, 503 when the pool cannot answer
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}
