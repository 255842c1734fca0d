// handlers/protected/todos/create.rs - POST /todos handler

use axum::{extract::State, Extension, Json};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::services::dto::{TodoSaveRequest, TodoSaveResponse};
use crate::services::TodoService;

/**
 * POST /todos - Create a todo owned by the caller
 *
 * Input: `{"title": "...", "contents": "..."}`
 *
 * The weather tag is taken from the configured weather source for today.
 */
pub async fn todo_create(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(request): Json<TodoSaveRequest>,
) -> Result<Json<TodoSaveResponse>, ApiError> {
    let service = TodoService::new(state.pool.clone(), state.weather.clone());
    Ok(Json(service.save_todo(&auth_user, request).await?))
}
