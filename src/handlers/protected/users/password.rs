// handlers/protected/users/password.rs - PUT /users handler

use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::services::dto::UserChangePasswordRequest;
use crate::services::UserService;

/**
 * PUT /users - Change the caller's password
 *
 * Input: `{"old_password": "...", "new_password": "..."}`
 *
 * The new password must satisfy the password policy and differ from the old one.
 */
pub async fn user_change_password(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(request): Json<UserChangePasswordRequest>,
) -> Result<StatusCode, ApiError> {
    let service = UserService::new(state.pool.clone());
    service.change_password(auth_user.id, request).await?;
    Ok(StatusCode::OK)
}
