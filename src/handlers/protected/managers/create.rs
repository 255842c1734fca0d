// handlers/protected/managers/create.rs - POST /todos/:todo_id/managers handler

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::services::dto::{ManagerSaveRequest, ManagerSaveResponse};
use crate::services::ManagerService;

/**
 * POST /todos/:todo_id/managers - Assign a manager to a todo
 *
 * Only the todo's owner may assign, and the owner cannot assign themselves.
 *
 * Input: `{"manager_user_id": 2}`
 *
 * Output: `{"id": 1, "user": {"id": 2, "email": "b@b.com"}}`
 */
pub async fn manager_create(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(todo_id): Path<i64>,
    Json(request): Json<ManagerSaveRequest>,
) -> Result<Json<ManagerSaveResponse>, ApiError> {
    let service = ManagerService::new(state.pool.clone());
    Ok(Json(service.save_manager(&auth_user, todo_id, request).await?))
}
