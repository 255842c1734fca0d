// handlers/protected/users/mod.rs - User account handlers

pub mod password; // PUT /users
pub mod show; // GET /users/:user_id

pub use password::user_change_password;
pub use show::user_show;
