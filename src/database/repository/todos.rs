use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;

use super::Repository;
use crate::database::manager::DatabaseError;
use crate::database::models::{Todo, TodoWithUser};

const TODOS: Repository<Todo> = Repository::new("todos");

const SELECT_WITH_USER: &str = r#"
    SELECT t.id, t.title, t.contents, t.weather, t.user_id, u.email AS user_email,
           t.created_at, t.modified_at
    FROM todos t
    JOIN users u ON u.id = t.user_id
"#;

pub struct TodoRepository;

impl TodoRepository {
    pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<Todo>, DatabaseError> {
        TODOS.find_by_id(conn, id).await
    }

    pub async fn find_with_user_by_id(
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<Option<TodoWithUser>, DatabaseError> {
        let sql = format!("{} WHERE t.id = ?", SELECT_WITH_USER);
        let todo = sqlx::query_as::<_, TodoWithUser>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(todo)
    }

    /// Most recently modified first
    pub async fn find_page_with_user(
        conn: &mut SqliteConnection,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TodoWithUser>, DatabaseError> {
        let sql = format!("{} ORDER BY t.modified_at DESC, t.id DESC LIMIT ? OFFSET ?", SELECT_WITH_USER);
        let todos = sqlx::query_as::<_, TodoWithUser>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *conn)
            .await?;
        Ok(todos)
    }

    pub async fn count(conn: &mut SqliteConnection) -> Result<i64, DatabaseError> {
        TODOS.count(conn).await
    }

    pub async fn insert(
        conn: &mut SqliteConnection,
        title: &str,
        contents: &str,
        weather: &str,
        user_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Todo, DatabaseError> {
        let id = sqlx::query(
            "INSERT INTO todos (title, contents, weather, user_id, created_at, modified_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(title)
        .bind(contents)
        .bind(weather)
        .bind(user_id)
        .bind(now)
        .bind(now)
        .execute(&mut *conn)
        .await?
        .last_insert_rowid();

        Ok(Todo {
            id,
            title: title.to_string(),
            contents: contents.to_string(),
            weather: weather.to_string(),
            user_id,
            created_at: now,
            modified_at: now,
        })
    }
}
