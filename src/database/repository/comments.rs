use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;

use super::Repository;
use crate::database::manager::DatabaseError;
use crate::database::models::CommentWithUser;

const COMMENTS: Repository<CommentWithUser> = Repository::new("comments");

pub struct CommentRepository;

impl CommentRepository {
    pub async fn insert(
        conn: &mut SqliteConnection,
        contents: &str,
        user_id: i64,
        todo_id: i64,
        now: DateTime<Utc>,
    ) -> Result<i64, DatabaseError> {
        let id = sqlx::query("INSERT INTO comments (contents, user_id, todo_id, created_at) VALUES (?, ?, ?, ?)")
            .bind(contents)
            .bind(user_id)
            .bind(todo_id)
            .bind(now)
            .execute(&mut *conn)
            .await?
            .last_insert_rowid();
        Ok(id)
    }

    pub async fn find_by_todo_id_with_user(
        conn: &mut SqliteConnection,
        todo_id: i64,
    ) -> Result<Vec<CommentWithUser>, DatabaseError> {
        let comments = sqlx::query_as::<_, CommentWithUser>(
            r#"
            SELECT c.id, c.contents, c.todo_id, u.id AS user_id, u.email AS user_email, c.created_at
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.todo_id = ?
            ORDER BY c.id
            "#,
        )
        .bind(todo_id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(comments)
    }

    pub async fn delete_by_id(conn: &mut SqliteConnection, id: i64) -> Result<u64, DatabaseError> {
        COMMENTS.delete_by_id(conn, id).await
    }
}
