// handlers/protected/managers/delete.rs - DELETE /todos/:todo_id/managers/:manager_id handler

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::services::ManagerService;

/**
 * DELETE /todos/:todo_id/managers/:manager_id - Remove a manager assignment
 *
 * Owner only. The link must belong to the todo in the path. Responds 200
 * with an empty body; deleting the same link again fails with
 * "Manager not found".
 */
pub async fn manager_delete(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path((todo_id, manager_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    let service = ManagerService::new(state.pool.clone());
    service.delete_manager(auth_user.id, todo_id, manager_id).await?;
    Ok(StatusCode::OK)
}
