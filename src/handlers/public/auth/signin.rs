// handlers/public/auth/signin.rs - POST /auth/signin handler

use axum::{extract::State, Json};

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::dto::{SigninRequest, TokenResponse};
use crate::services::AuthService;

/// POST /auth/signin - exchange email and password for a bearer token
pub async fn signin_post(
    State(state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let service = AuthService::new(state.pool.clone(), state.config.security.clone());
    Ok(Json(service.signin(request).await?))
}
