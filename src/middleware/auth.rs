use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::app::AppState;
use crate::auth::{decode_jwt, strip_bearer, Claims};
use crate::database::models::UserRole;
use crate::error::ApiError;

/// Authenticated user context extracted from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub user_role: UserRole,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.user_role == UserRole::Admin
    }
}

impl TryFrom<Claims> for AuthUser {
    type Error = String;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let id = claims.user_id().map_err(|e| e.to_string())?;
        Ok(Self {
            id,
            email: claims.email,
            user_role: claims.user_role,
        })
    }
}

/// JWT authentication middleware that validates tokens and extracts user context
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_jwt_from_headers(request.headers()).map_err(ApiError::unauthorized)?;

    let claims = decode_jwt(&state.config.security, &token).map_err(|e| ApiError::unauthorized(e.to_string()))?;

    let auth_user = AuthUser::try_from(claims).map_err(ApiError::unauthorized)?;
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if !auth_str.starts_with("Bearer ") {
        return Err("Authorization header must use Bearer token format".to_string());
    }

    strip_bearer(auth_str)
        .map(str::to_string)
        .ok_or_else(|| "Empty JWT token".to_string())
}
