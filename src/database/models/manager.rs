use sqlx::FromRow;

/// Link granting `user_id` management rights over `todo_id`
#[derive(Debug, Clone, FromRow)]
pub struct Manager {
    pub id: i64,
    pub user_id: i64,
    pub todo_id: i64,
}

impl Manager {
    pub fn belongs_to(&self, todo_id: i64) -> bool {
        self.todo_id == todo_id
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ManagerWithUser {
    pub id: i64,
    pub todo_id: i64,
    pub user_id: i64,
    pub user_email: String,
}
