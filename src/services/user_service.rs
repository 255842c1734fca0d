use sqlx::SqlitePool;
use tracing::{info, warn};

use super::dto::{UserChangePasswordRequest, UserResponse, UserRoleChangeRequest};
use super::error::{ServiceError, EMAIL_TAKEN, INVALID_USER_ROLE, SAME_PASSWORD, WRONG_PASSWORD};
use super::lookup;
use crate::auth::password::{
    hash_password_blocking, validate_password, verify_password_blocking, PASSWORD_POLICY_MESSAGE,
};
use crate::database::DatabaseError;
use crate::database::models::{User, UserRole};
use crate::database::repository::UserRepository;

pub struct UserService {
    pool: SqlitePool,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user after checking the password policy and email uniqueness
    pub async fn create_user(&self, email: &str, password: &str, user_role: UserRole) -> Result<User, ServiceError> {
        if !validate_password(password) {
            return Err(ServiceError::validation("password", PASSWORD_POLICY_MESSAGE));
        }

        let hash = hash_password_blocking(password.to_string()).await?;

        let mut tx = self.pool.begin().await?;
        if UserRepository::exists_by_email(&mut *tx, email).await? {
            return Err(ServiceError::invalid_request(EMAIL_TAKEN));
        }

        // A concurrent signup can take the email between the check and the insert
        let user = UserRepository::insert(&mut *tx, email, &hash, user_role)
            .await
            .map_err(insert_error)?;
        tx.commit().await?;

        info!("Created user {} with role {}", user.id, user.user_role);
        Ok(user)
    }

    pub async fn get_user(&self, user_id: i64) -> Result<UserResponse, ServiceError> {
        let mut conn = self.pool.acquire().await?;
        let user = lookup::user_by_id(&mut conn, user_id).await?;
        Ok(UserResponse::from(&user))
    }

    pub async fn change_password(&self, user_id: i64, request: UserChangePasswordRequest) -> Result<(), ServiceError> {
        if !validate_password(&request.new_password) {
            return Err(ServiceError::validation("new_password", PASSWORD_POLICY_MESSAGE));
        }

        let user = {
            let mut conn = self.pool.acquire().await?;
            lookup::user_by_id(&mut conn, user_id).await?
        };

        if request.old_password == request.new_password {
            return Err(ServiceError::invalid_request(SAME_PASSWORD));
        }
        if !verify_password_blocking(request.old_password, user.password).await? {
            warn!("Password change for user {} rejected: wrong password", user.id);
            return Err(ServiceError::invalid_request(WRONG_PASSWORD));
        }

        let hash = hash_password_blocking(request.new_password).await?;

        let mut tx = self.pool.begin().await?;
        UserRepository::update_password(&mut *tx, user.id, &hash).await?;
        tx.commit().await?;

        info!("User {} changed password", user.id);
        Ok(())
    }

    pub async fn change_user_role(&self, user_id: i64, request: UserRoleChangeRequest) -> Result<(), ServiceError> {
        let mut tx = self.pool.begin().await?;
        let user = lookup::user_by_id(&mut *tx, user_id).await?;

        let role: UserRole = request
            .role
            .parse()
            .map_err(|_| ServiceError::invalid_request(INVALID_USER_ROLE))?;

        UserRepository::update_role(&mut *tx, user.id, role).await?;
        tx.commit().await?;

        info!("User {} role changed to {}", user.id, role);
        Ok(())
    }
}

fn insert_error(err: DatabaseError) -> ServiceError {
    if err.is_unique_violation() {
        ServiceError::invalid_request(EMAIL_TAKEN)
    } else {
        ServiceError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::verify_password;
    use crate::services::error::USER_NOT_FOUND;
    use crate::testing::{TestContext, TEST_PASSWORD};

    fn password_request(old: &str, new: &str) -> UserChangePasswordRequest {
        UserChangePasswordRequest {
            old_password: old.to_string(),
            new_password: new.to_string(),
        }
    }

    #[tokio::test]
    async fn get_user_returns_public_identity() {
        let ctx = TestContext::new().await.unwrap();
        let user = ctx.create_user("a@a.com", UserRole::User).await.unwrap();
        let service = UserService::new(ctx.pool.clone());

        assert_eq!(service.get_user(user.id).await.unwrap(), UserResponse::new(user.id, "a@a.com"));
        assert_eq!(service.get_user(user.id + 1).await.unwrap_err().to_string(), USER_NOT_FOUND);
    }

    #[tokio::test]
    async fn create_user_rejects_taken_email() {
        let ctx = TestContext::new().await.unwrap();
        let service = UserService::new(ctx.pool.clone());
        service.create_user("a@a.com", TEST_PASSWORD, UserRole::User).await.unwrap();

        let err = service
            .create_user("a@a.com", TEST_PASSWORD, UserRole::User)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), EMAIL_TAKEN);
        assert_eq!(ctx.count_rows("users").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn unique_violation_on_insert_maps_to_email_taken() {
        let ctx = TestContext::new().await.unwrap();
        ctx.create_user("a@a.com", UserRole::User).await.unwrap();

        // Insert past the existence check, as the losing side of a signup race does
        let mut conn = ctx.pool.acquire().await.unwrap();
        let err = UserRepository::insert(&mut conn, "a@a.com", "hash", UserRole::User)
            .await
            .unwrap_err();
        assert!(err.is_unique_violation());

        let mapped = insert_error(err);
        assert!(matches!(mapped, ServiceError::InvalidRequest(ref message) if message == EMAIL_TAKEN));
    }

    #[test]
    fn other_insert_failures_stay_database_errors() {
        let mapped = insert_error(DatabaseError::from(sqlx::Error::RowNotFound));
        assert!(matches!(mapped, ServiceError::Database(_)));
    }

    #[tokio::test]
    async fn change_password_replaces_hash() {
        let ctx = TestContext::new().await.unwrap();
        let user = ctx.create_user("a@a.com", UserRole::User).await.unwrap();
        let service = UserService::new(ctx.pool.clone());

        service
            .change_password(user.id, password_request(TEST_PASSWORD, "NewPassword2"))
            .await
            .unwrap();

        let mut conn = ctx.pool.acquire().await.unwrap();
        let stored = UserRepository::find_by_id(&mut conn, user.id).await.unwrap().unwrap();
        assert!(verify_password("NewPassword2", &stored.password).unwrap());
        assert!(!verify_password(TEST_PASSWORD, &stored.password).unwrap());
    }

    #[tokio::test]
    async fn change_password_rejects_policy_violations() {
        let ctx = TestContext::new().await.unwrap();
        let user = ctx.create_user("a@a.com", UserRole::User).await.unwrap();
        let service = UserService::new(ctx.pool.clone());

        let err = service
            .change_password(user.id, password_request(TEST_PASSWORD, "weak"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation { field: "new_password", .. }));
    }

    #[tokio::test]
    async fn change_password_rejects_same_and_wrong_passwords() {
        let ctx = TestContext::new().await.unwrap();
        let user = ctx.create_user("a@a.com", UserRole::User).await.unwrap();
        let service = UserService::new(ctx.pool.clone());

        let same = service
            .change_password(user.id, password_request(TEST_PASSWORD, TEST_PASSWORD))
            .await
            .unwrap_err();
        assert_eq!(same.to_string(), SAME_PASSWORD);

        let wrong = service
            .change_password(user.id, password_request("Password9", "NewPassword2"))
            .await
            .unwrap_err();
        assert_eq!(wrong.to_string(), WRONG_PASSWORD);
    }

    #[tokio::test]
    async fn change_user_role_parses_case_insensitively() {
        let ctx = TestContext::new().await.unwrap();
        let user = ctx.create_user("a@a.com", UserRole::User).await.unwrap();
        let service = UserService::new(ctx.pool.clone());

        service
            .change_user_role(user.id, UserRoleChangeRequest { role: "admin".to_string() })
            .await
            .unwrap();

        let mut conn = ctx.pool.acquire().await.unwrap();
        let stored = UserRepository::find_by_id(&mut conn, user.id).await.unwrap().unwrap();
        assert_eq!(stored.user_role, UserRole::Admin);
    }

    #[tokio::test]
    async fn change_user_role_rejects_unknown_role_and_user() {
        let ctx = TestContext::new().await.unwrap();
        let user = ctx.create_user("a@a.com", UserRole::User).await.unwrap();
        let service = UserService::new(ctx.pool.clone());

        let err = service
            .change_user_role(user.id, UserRoleChangeRequest { role: "owner".to_string() })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), INVALID_USER_ROLE);

        let err = service
            .change_user_role(99, UserRoleChangeRequest { role: "ADMIN".to_string() })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), USER_NOT_FOUND);
    }
}
