use sqlx::SqliteConnection;

use super::Repository;
use crate::database::manager::DatabaseError;
use crate::database::models::{Manager, ManagerWithUser};

const MANAGERS: Repository<Manager> = Repository::new("managers");

pub struct ManagerRepository;

impl ManagerRepository {
    pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<Manager>, DatabaseError> {
        MANAGERS.find_by_id(conn, id).await
    }

    /// Every link of a todo with its assignee, in one query, oldest link first
    pub async fn find_by_todo_id_with_user(
        conn: &mut SqliteConnection,
        todo_id: i64,
    ) -> Result<Vec<ManagerWithUser>, DatabaseError> {
        let managers = sqlx::query_as::<_, ManagerWithUser>(
            r#"
            SELECT m.id, m.todo_id, u.id AS user_id, u.email AS user_email
            FROM managers m
            JOIN users u ON u.id = m.user_id
            WHERE m.todo_id = ?
            ORDER BY m.id
            "#,
        )
        .bind(todo_id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(managers)
    }

    pub async fn insert(conn: &mut SqliteConnection, user_id: i64, todo_id: i64) -> Result<Manager, DatabaseError> {
        let id = sqlx::query("INSERT INTO managers (user_id, todo_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(todo_id)
            .execute(&mut *conn)
            .await?
            .last_insert_rowid();

        Ok(Manager { id, user_id, todo_id })
    }

    pub async fn delete(conn: &mut SqliteConnection, manager: &Manager) -> Result<(), DatabaseError> {
        MANAGERS.delete_by_id(conn, manager.id).await?;
        Ok(())
    }
}
