pub mod admin;
pub mod audit;
pub mod auth;

pub use admin::require_admin;
pub use audit::admin_audit_log;
pub use auth::{jwt_auth_middleware, AuthUser};
