pub mod create_todo;
pub mod update_todo;
pub mod delete_todo;

pub use create_todo::*;
pub use update_todo::*;
pub use delete_todo::*;
