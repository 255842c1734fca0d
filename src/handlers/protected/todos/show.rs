// handlers/protected/todos/show.rs - GET /todos/:todo_id handler

use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::dto::TodoResponse;
use crate::services::TodoService;

pub async fn todo_show(State(state): State<AppState>, Path(todo_id): Path<i64>) -> Result<Json<TodoResponse>, ApiError> {
    let service = TodoService::new(state.pool.clone(), state.weather.clone());
    Ok(Json(service.get_todo(todo_id).await?))
}
