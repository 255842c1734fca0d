use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct CommentWithUser {
    pub id: i64,
    pub contents: String,
    pub todo_id: i64,
    pub user_id: i64,
    pub user_email: String,
    pub created_at: DateTime<Utc>,
}
