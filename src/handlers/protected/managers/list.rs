// handlers/protected/managers/list.rs - GET /todos/:todo_id/managers handler

use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::dto::ManagerResponse;
use crate::services::ManagerService;

/// GET /todos/:todo_id/managers - list the todo's managers in assignment order
pub async fn manager_list(
    State(state): State<AppState>,
    Path(todo_id): Path<i64>,
) -> Result<Json<Vec<ManagerResponse>>, ApiError> {
    let service = ManagerService::new(state.pool.clone());
    Ok(Json(service.get_managers(todo_id).await?))
}
