// handlers/public/auth/mod.rs - Token acquisition endpoints

pub mod signin; // POST /auth/signin
pub mod signup; // POST /auth/signup

pub use signin::signin_post;
pub use signup::signup_post;
