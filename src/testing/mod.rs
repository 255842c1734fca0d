use anyhow::Context;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::auth::password::hash_password;
use crate::config::AppConfig;
use crate::database::models::{Todo, User, UserRole};
use crate::database::repository::{TodoRepository, UserRepository};
use crate::database::DatabaseManager;
use crate::middleware::AuthUser;

pub const TEST_PASSWORD: &str = "Password1";

/// Fresh in-memory database with the schema applied
pub struct TestContext {
    pub pool: SqlitePool,
    pub config: AppConfig,
    password_hash: String,
}

impl TestContext {
    pub async fn new() -> anyhow::Result<Self> {
        let config = AppConfig::testing();
        let pool = DatabaseManager::connect(&config.database)
            .await
            .context("failed to open in-memory database")?;
        DatabaseManager::migrate(&pool).await.context("failed to apply schema")?;

        Ok(Self {
            pool,
            config,
            password_hash: hash_password(TEST_PASSWORD)?,
        })
    }

    /// Insert a user whose password is `TEST_PASSWORD`
    pub async fn create_user(&self, email: &str, user_role: UserRole) -> anyhow::Result<User> {
        let mut conn = self.pool.acquire().await?;
        let user = UserRepository::insert(&mut conn, email, &self.password_hash, user_role).await?;
        Ok(user)
    }

    pub async fn create_todo(&self, owner: &User, title: &str) -> anyhow::Result<Todo> {
        let mut conn = self.pool.acquire().await?;
        let todo = TodoRepository::insert(&mut conn, title, "Test Contents", "Sunny", owner.id, Utc::now()).await?;
        Ok(todo)
    }

    pub async fn count_rows(&self, table: &str) -> anyhow::Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        let (count,): (i64,) = sqlx::query_as(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }
}

pub fn auth_user(user: &User) -> AuthUser {
    AuthUser {
        id: user.id,
        email: user.email.clone(),
        user_role: user.user_role,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_context_creation() {
        let ctx = TestContext::new().await.unwrap();
        assert_eq!(ctx.count_rows("users").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn creates_users_and_todos() {
        let ctx = TestContext::new().await.unwrap();
        let owner = ctx.create_user("owner@a.com", UserRole::User).await.unwrap();
        let todo = ctx.create_todo(&owner, "Clean the house").await.unwrap();

        assert_eq!(todo.user_id, owner.id);
        assert_eq!(ctx.count_rows("todos").await.unwrap(), 1);
    }
}
