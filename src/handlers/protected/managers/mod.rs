// handlers/protected/managers/mod.rs - Per-todo manager assignment handlers

pub mod create; // POST   /todos/:todo_id/managers
pub mod delete; // DELETE /todos/:todo_id/managers/:manager_id
pub mod list; // GET    /todos/:todo_id/managers

pub use create::manager_create;
pub use delete::manager_delete;
pub use list::manager_list;
