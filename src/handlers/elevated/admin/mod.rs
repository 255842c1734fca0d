// handlers/elevated/admin/mod.rs - Administrative handlers

pub mod comment_delete; // DELETE /admin/comments/:comment_id
pub mod user_role; // PATCH  /admin/users/:user_id

pub use comment_delete::comment_delete;
pub use user_role::user_role_update;
