use sqlx::SqlitePool;
use tracing::{info, warn};

use super::dto::{SigninRequest, SignupRequest, TokenResponse};
use super::error::{ServiceError, USER_NOT_FOUND, WRONG_PASSWORD};
use super::user_service::UserService;
use crate::auth::bearer_token;
use crate::auth::password::verify_password_blocking;
use crate::config::SecurityConfig;
use crate::database::repository::UserRepository;

/// Account creation and credential exchange. Both operations answer with a bearer token.
pub struct AuthService {
    pool: SqlitePool,
    security: SecurityConfig,
}

impl AuthService {
    pub fn new(pool: SqlitePool, security: SecurityConfig) -> Self {
        Self { pool, security }
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<TokenResponse, ServiceError> {
        let user = UserService::new(self.pool.clone())
            .create_user(&request.email, &request.password, request.user_role)
            .await?;

        Ok(TokenResponse {
            bearer_token: bearer_token(&self.security, user.id, &user.email, user.user_role)?,
        })
    }

    pub async fn signin(&self, request: SigninRequest) -> Result<TokenResponse, ServiceError> {
        let user = {
            let mut conn = self.pool.acquire().await?;
            UserRepository::find_by_email(&mut conn, &request.email)
                .await?
                .ok_or_else(|| ServiceError::invalid_request(USER_NOT_FOUND))?
        };

        if !verify_password_blocking(request.password, user.password.clone()).await? {
            warn!("Signin rejected for user {}: wrong password", user.id);
            return Err(ServiceError::AuthFailed(WRONG_PASSWORD.to_string()));
        }

        info!("User {} signed in", user.id);

        Ok(TokenResponse {
            bearer_token: bearer_token(&self.security, user.id, &user.email, user.user_role)?,
        })
    }
}
