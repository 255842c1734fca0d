//! Record lookups and ownership rules shared by the services. Each lookup
//! turns an absent row into the matching `InvalidRequest`.

use sqlx::SqliteConnection;

use super::error::{
    ServiceError, MANAGER_NOT_FOUND, NOT_MANAGER_OF_TODO, NOT_TODO_OWNER, SELF_ASSIGNMENT, TODO_NOT_FOUND,
    USER_NOT_FOUND,
};
use crate::database::models::{Manager, Todo, User};
use crate::database::repository::{ManagerRepository, TodoRepository, UserRepository};

pub(crate) async fn user_by_id(conn: &mut SqliteConnection, user_id: i64) -> Result<User, ServiceError> {
    UserRepository::find_by_id(conn, user_id)
        .await?
        .ok_or_else(|| ServiceError::invalid_request(USER_NOT_FOUND))
}

pub(crate) async fn todo_by_id(conn: &mut SqliteConnection, todo_id: i64) -> Result<Todo, ServiceError> {
    TodoRepository::find_by_id(conn, todo_id)
        .await?
        .ok_or_else(|| ServiceError::invalid_request(TODO_NOT_FOUND))
}

pub(crate) async fn manager_by_id(conn: &mut SqliteConnection, manager_id: i64) -> Result<Manager, ServiceError> {
    ManagerRepository::find_by_id(conn, manager_id)
        .await?
        .ok_or_else(|| ServiceError::invalid_request(MANAGER_NOT_FOUND))
}

pub(crate) fn ensure_todo_owner(todo: &Todo, user: &User) -> Result<(), ServiceError> {
    if !todo.is_owned_by(user.id) {
        return Err(ServiceError::invalid_request(NOT_TODO_OWNER));
    }
    Ok(())
}

pub(crate) fn ensure_not_self_assign(owner: &User, manager_user: &User) -> Result<(), ServiceError> {
    if owner.id == manager_user.id {
        return Err(ServiceError::invalid_request(SELF_ASSIGNMENT));
    }
    Ok(())
}

pub(crate) fn ensure_manager_of_todo(manager: &Manager, todo: &Todo) -> Result<(), ServiceError> {
    if !manager.belongs_to(todo.id) {
        return Err(ServiceError::invalid_request(NOT_MANAGER_OF_TODO));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::UserRole;
    use chrono::Utc;

    fn user(id: i64) -> User {
        User {
            id,
            email: format!("user{}@a.com", id),
            password: String::new(),
            user_role: UserRole::User,
        }
    }

    fn todo(id: i64, owner: i64) -> Todo {
        Todo {
            id,
            title: "Test Title".to_string(),
            contents: "Test Contents".to_string(),
            weather: "Sunny".to_string(),
            user_id: owner,
            created_at: Utc::now(),
            modified_at: Utc::now(),
        }
    }

    #[test]
    fn owner_check_compares_ids() {
        assert!(ensure_todo_owner(&todo(1, 1), &user(1)).is_ok());
        let err = ensure_todo_owner(&todo(1, 2), &user(1)).unwrap_err();
        assert_eq!(err.to_string(), NOT_TODO_OWNER);
    }

    #[test]
    fn self_assignment_is_rejected() {
        assert!(ensure_not_self_assign(&user(1), &user(2)).is_ok());
        let err = ensure_not_self_assign(&user(1), &user(1)).unwrap_err();
        assert_eq!(err.to_string(), SELF_ASSIGNMENT);
    }

    #[test]
    fn manager_must_reference_todo() {
        let manager = Manager { id: 999, user_id: 3, todo_id: 1 };
        assert!(ensure_manager_of_todo(&manager, &todo(1, 1)).is_ok());
        let err = ensure_manager_of_todo(&manager, &todo(2, 1)).unwrap_err();
        assert_eq!(err.to_string(), NOT_MANAGER_OF_TODO);
    }
}
