// handlers/protected/todos/mod.rs - Todo handlers

pub mod create; // POST /todos
pub mod list; // GET  /todos
pub mod show; // GET  /todos/:todo_id

pub use create::todo_create;
pub use list::todo_list;
pub use show::todo_show;
