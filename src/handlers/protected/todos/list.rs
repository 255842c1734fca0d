// handlers/protected/todos/list.rs - GET /todos handler

use axum::{
    extract::{Query, State},
    Json,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::dto::{PageParams, TodoPage};
use crate::services::TodoService;

/// GET /todos?page=1&size=10 - newest todos first, 1-based pages
pub async fn todo_list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<TodoPage>, ApiError> {
    let service = TodoService::new(state.pool.clone(), state.weather.clone());
    Ok(Json(service.get_todos(params).await?))
}
