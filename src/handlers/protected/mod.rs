// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Every handler here runs behind `jwt_auth_middleware` and reads the caller
// from the `AuthUser` request extension.

pub mod comments;
pub mod managers;
pub mod todos;
pub mod users;
