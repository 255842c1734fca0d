// handlers/public/auth/signup.rs - POST /auth/signup handler

use axum::{extract::State, Json};

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::dto::{SignupRequest, TokenResponse};
use crate::services::AuthService;

/**
 * POST /auth/signup - Create an account and receive a bearer token
 *
 * Input: `{"email": "...", "password": "...", "user_role": "USER" | "ADMIN"}`
 * (`user_role` defaults to `USER`). The password must be at least 8
 * characters and contain a digit and an uppercase letter.
 *
 * Output: `{"bearer_token": "Bearer eyJ..."}`
 */
pub async fn signup_post(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let service = AuthService::new(state.pool.clone(), state.config.security.clone());
    Ok(Json(service.signup(request).await?))
}
