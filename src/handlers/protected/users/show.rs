// handlers/protected/users/show.rs - GET /users/:user_id handler

use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::dto::UserResponse;
use crate::services::UserService;

/// GET /users/:user_id - public identity of any user
pub async fn user_show(State(state): State<AppState>, Path(user_id): Path<i64>) -> Result<Json<UserResponse>, ApiError> {
    let service = UserService::new(state.pool.clone());
    Ok(Json(service.get_user(user_id).await?))
}
