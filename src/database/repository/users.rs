use sqlx::SqliteConnection;

use super::Repository;
use crate::database::manager::DatabaseError;
use crate::database::models::{User, UserRole};

const USERS: Repository<User> = Repository::new("users");

pub struct UserRepository;

impl UserRepository {
    pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<User>, DatabaseError> {
        USERS.find_by_id(conn, id).await
    }

    pub async fn find_by_email(conn: &mut SqliteConnection, email: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(user)
    }

    pub async fn exists_by_email(conn: &mut SqliteConnection, email: &str) -> Result<bool, DatabaseError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&mut *conn)
            .await?;
        Ok(count > 0)
    }

    pub async fn insert(
        conn: &mut SqliteConnection,
        email: &str,
        password_hash: &str,
        user_role: UserRole,
    ) -> Result<User, DatabaseError> {
        let id = sqlx::query("INSERT INTO users (email, password, user_role) VALUES (?, ?, ?)")
            .bind(email)
            .bind(password_hash)
            .bind(user_role.as_str())
            .execute(&mut *conn)
            .await?
            .last_insert_rowid();

        Ok(User {
            id,
            email: email.to_string(),
            password: password_hash.to_string(),
            user_role,
        })
    }

    pub async fn update_password(
        conn: &mut SqliteConnection,
        id: i64,
        password_hash: &str,
    ) -> Result<(), DatabaseError> {
        sqlx::query("UPDATE users SET password = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    pub async fn update_role(conn: &mut SqliteConnection, id: i64, user_role: UserRole) -> Result<(), DatabaseError> {
        sqlx::query("UPDATE users SET user_role = ? WHERE id = ?")
            .bind(user_role.as_str())
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
