use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub contents: String,
    pub weather: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Todo {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Todo joined with its owner's email
#[derive(Debug, Clone, FromRow)]
pub struct TodoWithUser {
    pub id: i64,
    pub title: String,
    pub contents: String,
    pub weather: String,
    pub user_id: i64,
    pub user_email: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}
