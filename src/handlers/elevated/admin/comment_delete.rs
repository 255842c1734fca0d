// handlers/elevated/admin/comment_delete.rs - DELETE /admin/comments/:comment_id handler

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::CommentService;

/// DELETE /admin/comments/:comment_id - remove any comment; unknown ids succeed
pub async fn comment_delete(State(state): State<AppState>, Path(comment_id): Path<i64>) -> Result<StatusCode, ApiError> {
    let service = CommentService::new(state.pool.clone());
    service.delete_comment(comment_id).await?;
    Ok(StatusCode::OK)
}
