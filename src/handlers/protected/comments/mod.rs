// handlers/protected/comments/mod.rs - Todo comment handlers

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::services::dto::{CommentResponse, CommentSaveRequest, CommentSaveResponse};
use crate::services::CommentService;

/// POST /todos/:todo_id/comments - comment on a todo as the caller
pub async fn comment_create(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(todo_id): Path<i64>,
    Json(request): Json<CommentSaveRequest>,
) -> Result<Json<CommentSaveResponse>, ApiError> {
    let service = CommentService::new(state.pool.clone());
    Ok(Json(service.save_comment(&auth_user, todo_id, request).await?))
}

/// GET /todos/:todo_id/comments - comments with their authors, oldest first
pub async fn comment_list(
    State(state): State<AppState>,
    Path(todo_id): Path<i64>,
) -> Result<Json<Vec<CommentResponse>>, ApiError> {
    let service = CommentService::new(state.pool.clone());
    Ok(Json(service.get_comments(todo_id).await?))
}
