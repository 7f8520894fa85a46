pub mod create_vote;
pub mod update_vote;
pub mod cast_vote;
pub mod delete_vote;

pub use create_vote::*;
pub use update_vote::*;
pub use cast_vote::*;
pub use delete_vote::*;
