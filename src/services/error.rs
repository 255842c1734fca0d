use crate::auth::password::PasswordError;
use crate::auth::JwtError;
use crate::database::manager::DatabaseError;
use crate::services::weather::WeatherError;

pub const USER_NOT_FOUND: &str = "User not found";
pub const TODO_NOT_FOUND: &str = "Todo not found";
pub const MANAGER_NOT_FOUND: &str = "Manager not found";
pub const NOT_TODO_OWNER: &str = "Not the Owner of Todo";
pub const SELF_ASSIGNMENT: &str = "Can't assign self owner";
pub const NOT_MANAGER_OF_TODO: &str = "Not a Manager of Todo";
pub const EMAIL_TAKEN: &str = "Email already exists";
pub const WRONG_PASSWORD: &str = "Wrong password";
pub const SAME_PASSWORD: &str = "New password must be different from the current password";
pub const INVALID_USER_ROLE: &str = "Invalid user role";

/// Failures of a service operation. Every variant aborts the surrounding transaction.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request breaks a domain rule or names a record that does not exist
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{message}")]
    Validation { field: &'static str, message: String },

    #[error("{0}")]
    AuthFailed(String),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Jwt(#[from] JwtError),

    #[error(transparent)]
    Weather(#[from] WeatherError),
}

impl ServiceError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ServiceError::InvalidRequest(message.into())
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        ServiceError::Validation {
            field,
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        ServiceError::Database(DatabaseError::from(err))
    }
}
