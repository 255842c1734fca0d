use sqlx::SqlitePool;
use tracing::{debug, info};

use super::dto::{ManagerResponse, ManagerSaveRequest, ManagerSaveResponse, UserResponse};
use super::error::ServiceError;
use super::lookup;
use crate::database::repository::ManagerRepository;
use crate::middleware::AuthUser;

/// Assigns, lists and removes the managers of a todo.
///
/// Only a todo's owner may add or remove managers, the owner can never be
/// assigned to their own todo, and a link is only removed through the todo it
/// belongs to. Each operation runs in one transaction; returning an error
/// drops it uncommitted.
pub struct ManagerService {
    pool: SqlitePool,
}

impl ManagerService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn save_manager(
        &self,
        auth_user: &AuthUser,
        todo_id: i64,
        request: ManagerSaveRequest,
    ) -> Result<ManagerSaveResponse, ServiceError> {
        let mut tx = self.pool.begin().await?;

        let user = lookup::user_by_id(&mut *tx, auth_user.id).await?;
        let todo = lookup::todo_by_id(&mut *tx, todo_id).await?;
        lookup::ensure_todo_owner(&todo, &user)?;

        let manager_user = lookup::user_by_id(&mut *tx, request.manager_user_id).await?;
        lookup::ensure_not_self_assign(&user, &manager_user)?;

        let manager = ManagerRepository::insert(&mut *tx, manager_user.id, todo.id).await?;
        tx.commit().await?;

        info!(
            "User {} assigned user {} as manager {} of todo {}",
            user.id, manager_user.id, manager.id, todo.id
        );

        Ok(ManagerResponse {
            id: manager.id,
            user: UserResponse::from(&manager_user),
        })
    }

    pub async fn get_managers(&self, todo_id: i64) -> Result<Vec<ManagerResponse>, ServiceError> {
        let mut tx = self.pool.begin().await?;

        let todo = lookup::todo_by_id(&mut *tx, todo_id).await?;
        let managers = ManagerRepository::find_by_todo_id_with_user(&mut *tx, todo.id).await?;
        tx.commit().await?;

        debug!("Todo {} has {} managers", todo.id, managers.len());
        Ok(managers.into_iter().map(ManagerResponse::from).collect())
    }

    pub async fn delete_manager(&self, user_id: i64, todo_id: i64, manager_id: i64) -> Result<(), ServiceError> {
        let mut tx = self.pool.begin().await?;

        let user = lookup::user_by_id(&mut *tx, user_id).await?;
        let todo = lookup::todo_by_id(&mut *tx, todo_id).await?;
        lookup::ensure_todo_owner(&todo, &user)?;

        let manager = lookup::manager_by_id(&mut *tx, manager_id).await?;
        lookup::ensure_manager_of_todo(&manager, &todo)?;

        ManagerRepository::delete(&mut *tx, &manager).await?;
        tx.commit().await?;

        info!("User {} removed manager {} from todo {}", user.id, manager.id, todo.id);
        Ok(())
    }
}
