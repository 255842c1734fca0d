pub mod auth_service;
pub mod comment_service;
pub mod dto;
pub mod error;
pub(crate) mod lookup;
pub mod manager_service;
pub mod todo_service;
pub mod user_service;
pub mod weather;

pub use auth_service::AuthService;
pub use comment_service::CommentService;
pub use error::ServiceError;
pub use manager_service::ManagerService;
pub use todo_service::TodoService;
pub use user_service::UserService;
pub use weather::{weather_source, WeatherSource};
