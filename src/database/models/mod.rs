pub mod comment;
pub mod manager;
pub mod todo;
pub mod user;

pub use comment::CommentWithUser;
pub use manager::{Manager, ManagerWithUser};
pub use todo::{Todo, TodoWithUser};
pub use user::{User, UserRole, UserRoleParseError};
