pub mod vote_state;
pub mod receipt;

pub use vote_state::*;
pub use receipt::*;
