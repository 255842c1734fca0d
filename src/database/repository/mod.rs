use sqlx::{sqlite::SqliteRow, FromRow, SqliteConnection};
use std::marker::PhantomData;

use crate::database::manager::DatabaseError;

pub mod comments;
pub mod managers;
pub mod todos;
pub mod users;

pub use comments::CommentRepository;
pub use managers::ManagerRepository;
pub use todos::TodoRepository;
pub use users::UserRepository;

/// Primary-key access shared by every table. Callers pass the connection so
/// that all reads and writes of one operation share its transaction.
pub struct Repository<T> {
    table_name: &'static str,
    _phantom: PhantomData<T>,
}

impl<T> Repository<T> {
    pub const fn new(table_name: &'static str) -> Self {
        Self {
            table_name,
            _phantom: PhantomData,
        }
    }
}

impl<T> Repository<T>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    pub async fn find_by_id(&self, conn: &mut SqliteConnection, id: i64) -> Result<Option<T>, DatabaseError> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", self.table_name);
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Returns the number of deleted rows (0 or 1)
    pub async fn delete_by_id(&self, conn: &mut SqliteConnection, id: i64) -> Result<u64, DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", self.table_name);
        let result = sqlx::query(&sql).bind(id).execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }

    pub async fn count(&self, conn: &mut SqliteConnection) -> Result<i64, DatabaseError> {
        let sql = format!("SELECT COUNT(*) FROM {}", self.table_name);
        let (count,): (i64,) = sqlx::query_as(&sql).fetch_one(&mut *conn).await?;
        Ok(count)
    }
}
