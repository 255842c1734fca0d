use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::models::{CommentWithUser, ManagerWithUser, TodoWithUser, User, UserRole};

// ---- users ----

/// Public identity of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
}

impl UserResponse {
    pub fn new(id: i64, email: impl Into<String>) -> Self {
        Self { id, email: email.into() }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.email.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub user_role: UserRole,
}

fn default_role() -> UserRole {
    UserRole::User
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub bearer_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRoleChangeRequest {
    pub role: String,
}

// ---- todos ----

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoSaveRequest {
    pub title: String,
    pub contents: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoSaveResponse {
    pub id: i64,
    pub title: String,
    pub contents: String,
    pub weather: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoResponse {
    pub id: i64,
    pub title: String,
    pub contents: String,
    pub weather: String,
    pub user: UserResponse,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<TodoWithUser> for TodoResponse {
    fn from(todo: TodoWithUser) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            contents: todo.contents,
            weather: todo.weather,
            user: UserResponse::new(todo.user_id, todo.user_email),
            created_at: todo.created_at,
            modified_at: todo.modified_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoPage {
    pub content: Vec<TodoResponse>,
    pub page: u32,
    pub size: u32,
    pub total_elements: i64,
    pub total_pages: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

// ---- managers ----

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerSaveRequest {
    pub manager_user_id: i64,
}

/// An assignment link and the assignee's public identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerResponse {
    pub id: i64,
    pub user: UserResponse,
}

pub type ManagerSaveResponse = ManagerResponse;

impl From<ManagerWithUser> for ManagerResponse {
    fn from(manager: ManagerWithUser) -> Self {
        Self {
            id: manager.id,
            user: UserResponse::new(manager.user_id, manager.user_email),
        }
    }
}

// ---- comments ----

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentSaveRequest {
    pub contents: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub contents: String,
    pub user: UserResponse,
}

pub type CommentSaveResponse = CommentResponse;

impl From<CommentWithUser> for CommentResponse {
    fn from(comment: CommentWithUser) -> Self {
        Self {
            id: comment.id,
            contents: comment.contents,
            user: UserResponse::new(comment.user_id, comment.user_email),
        }
    }
}
