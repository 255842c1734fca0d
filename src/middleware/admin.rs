use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{info, warn};

use super::AuthUser;
use crate::error::ApiError;

/// Admin gate. Runs after `jwt_auth_middleware`, which supplies the `AuthUser`.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    let auth_user = request
        .extensions()
        .get::<AuthUser>()
        .cloned()
        .ok_or_else(|| ApiError::unauthorized("No Authorization header found"))?;

    if !auth_user.is_admin() {
        warn!("Unauthorized admin access by user {} to {}", auth_user.id, request.uri());
        return Err(ApiError::forbidden("Unauthorized"));
    }

    info!("Admin access by user {} to {}", auth_user.id, request.uri());
    Ok(next.run(request).await)
}
