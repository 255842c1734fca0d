// handlers/elevated/admin/user_role.rs - PATCH /admin/users/:user_id handler

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::dto::UserRoleChangeRequest;
use crate::services::UserService;

/**
 * PATCH /admin/users/:user_id - Change a user's role
 *
 * Input: `{"role": "ADMIN"}` (case-insensitive, `USER` or `ADMIN`)
 *
 * Takes effect on the user's next token; tokens already issued keep their role.
 */
pub async fn user_role_update(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(request): Json<UserRoleChangeRequest>,
) -> Result<StatusCode, ApiError> {
    let service = UserService::new(state.pool.clone());
    service.change_user_role(user_id, request).await?;
    Ok(StatusCode::OK)
}
