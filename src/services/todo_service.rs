use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::info;

use super::dto::{PageParams, TodoPage, TodoResponse, TodoSaveRequest, TodoSaveResponse, UserResponse};
use super::error::{ServiceError, TODO_NOT_FOUND};
use super::lookup;
use super::weather::WeatherSource;
use crate::database::repository::TodoRepository;
use crate::middleware::AuthUser;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PAGE_SIZE: u32 = 10;
const MAX_PAGE_SIZE: u32 = 100;

pub struct TodoService {
    pool: SqlitePool,
    weather: Arc<dyn WeatherSource>,
}

impl TodoService {
    pub fn new(pool: SqlitePool, weather: Arc<dyn WeatherSource>) -> Self {
        Self { pool, weather }
    }

    pub async fn save_todo(&self, auth_user: &AuthUser, request: TodoSaveRequest) -> Result<TodoSaveResponse, ServiceError> {
        // Fetch before opening the transaction so the external call holds no connection
        let weather = self.weather.today().await?;

        let mut tx = self.pool.begin().await?;
        let user = lookup::user_by_id(&mut *tx, auth_user.id).await?;
        let todo = TodoRepository::insert(
            &mut *tx,
            &request.title,
            &request.contents,
            &weather,
            user.id,
            Utc::now(),
        )
        .await?;
        tx.commit().await?;

        info!("User {} created todo {}", user.id, todo.id);

        Ok(TodoSaveResponse {
            id: todo.id,
            title: todo.title,
            contents: todo.contents,
            weather: todo.weather,
            user: UserResponse::from(&user),
        })
    }

    pub async fn get_todos(&self, params: PageParams) -> Result<TodoPage, ServiceError> {
        let page = params.page.unwrap_or(DEFAULT_PAGE).max(1);
        let size = params.size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        let offset = i64::from(page - 1) * i64::from(size);

        let mut tx = self.pool.begin().await?;
        let todos = TodoRepository::find_page_with_user(&mut *tx, i64::from(size), offset).await?;
        let total_elements = TodoRepository::count(&mut *tx).await?;
        tx.commit().await?;

        let size_i64 = i64::from(size);
        Ok(TodoPage {
            content: todos.into_iter().map(TodoResponse::from).collect(),
            page,
            size,
            total_elements,
            total_pages: (total_elements + size_i64 - 1) / size_i64,
        })
    }

    pub async fn get_todo(&self, todo_id: i64) -> Result<TodoResponse, ServiceError> {
        let mut conn = self.pool.acquire().await?;
        let todo = TodoRepository::find_with_user_by_id(&mut conn, todo_id)
            .await?
            .ok_or_else(|| ServiceError::invalid_request(TODO_NOT_FOUND))?;
        Ok(TodoResponse::from(todo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::UserRole;
    use crate::services::error::USER_NOT_FOUND;
    use crate::services::weather::FixedWeather;
    use crate::testing::{auth_user, TestContext};

    fn service(ctx: &TestContext) -> TodoService {
        TodoService::new(ctx.pool.clone(), Arc::new(FixedWeather("Rainy".to_string())))
    }

    fn request(title: &str) -> TodoSaveRequest {
        TodoSaveRequest {
            title: title.to_string(),
            contents: "Detailed cleaning".to_string(),
        }
    }

    #[tokio::test]
    async fn save_todo_stores_weather_and_owner() {
        let ctx = TestContext::new().await.unwrap();
        let owner = ctx.create_user("a@a.com", UserRole::User).await.unwrap();

        let response = service(&ctx).save_todo(&auth_user(&owner), request("Clean the house")).await.unwrap();

        assert_eq!(response.weather, "Rainy");
        assert_eq!(response.user, UserResponse::new(owner.id, "a@a.com"));

        let stored = service(&ctx).get_todo(response.id).await.unwrap();
        assert_eq!(stored.title, "Clean the house");
        assert_eq!(stored.user.id, owner.id);
    }

    #[tokio::test]
    async fn save_todo_requires_existing_user() {
        let ctx = TestContext::new().await.unwrap();
        let owner = ctx.create_user("a@a.com", UserRole::User).await.unwrap();
        let mut ghost = auth_user(&owner);
        ghost.id = 42;

        let err = service(&ctx).save_todo(&ghost, request("Title")).await.unwrap_err();
        assert_eq!(err.to_string(), USER_NOT_FOUND);
        assert_eq!(ctx.count_rows("todos").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn get_todo_fails_when_missing() {
        let ctx = TestContext::new().await.unwrap();
        let err = service(&ctx).get_todo(1).await.unwrap_err();
        assert_eq!(err.to_string(), TODO_NOT_FOUND);
    }

    #[tokio::test]
    async fn get_todos_pages_newest_first() {
        let ctx = TestContext::new().await.unwrap();
        let owner = ctx.create_user("a@a.com", UserRole::User).await.unwrap();
        let svc = service(&ctx);
        for i in 0..3 {
            svc.save_todo(&auth_user(&owner), request(&format!("todo {}", i))).await.unwrap();
        }

        let first = svc.get_todos(PageParams { page: Some(1), size: Some(2) }).await.unwrap();
        assert_eq!(first.total_elements, 3);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.content.len(), 2);
        assert_eq!(first.content[0].title, "todo 2");

        let second = svc.get_todos(PageParams { page: Some(2), size: Some(2) }).await.unwrap();
        assert_eq!(second.content.len(), 1);
        assert_eq!(second.content[0].title, "todo 0");
    }

    #[tokio::test]
    async fn get_todos_clamps_parameters() {
        let ctx = TestContext::new().await.unwrap();
        let page = service(&ctx)
            .get_todos(PageParams { page: Some(0), size: Some(1000) })
            .await
            .unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.size, MAX_PAGE_SIZE);
        assert_eq!(page.total_pages, 0);
    }
}
