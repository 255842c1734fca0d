use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use super::dto::{CommentResponse, CommentSaveRequest, CommentSaveResponse, UserResponse};
use super::error::ServiceError;
use super::lookup;
use crate::database::repository::CommentRepository;
use crate::middleware::AuthUser;

pub struct CommentService {
    pool: SqlitePool,
}

impl CommentService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn save_comment(
        &self,
        auth_user: &AuthUser,
        todo_id: i64,
        request: CommentSaveRequest,
    ) -> Result<CommentSaveResponse, ServiceError> {
        let mut tx = self.pool.begin().await?;

        let user = lookup::user_by_id(&mut *tx, auth_user.id).await?;
        let todo = lookup::todo_by_id(&mut *tx, todo_id).await?;
        let id = CommentRepository::insert(&mut *tx, &request.contents, user.id, todo.id, Utc::now()).await?;
        tx.commit().await?;

        info!("User {} commented {} on todo {}", user.id, id, todo.id);

        Ok(CommentResponse {
            id,
            contents: request.contents,
            user: UserResponse::from(&user),
        })
    }

    pub async fn get_comments(&self, todo_id: i64) -> Result<Vec<CommentResponse>, ServiceError> {
        let mut conn = self.pool.acquire().await?;
        let comments = CommentRepository::find_by_todo_id_with_user(&mut conn, todo_id).await?;
        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    /// Admin removal; an unknown id is not an error
    pub async fn delete_comment(&self, comment_id: i64) -> Result<(), ServiceError> {
        let mut tx = self.pool.begin().await?;
        let deleted = CommentRepository::delete_by_id(&mut *tx, comment_id).await?;
        tx.commit().await?;

        info!("Deleted comment {} ({} rows)", comment_id, deleted);
        Ok(())
    }
}
