use anchor_lang::prelude::*;

#[error_code]
pub enum VoteError {
    // Occupancy errors
    #[msg("A poll with this name already exists for this owner")]
    AlreadyExists,

    #[msg("Voter has already voted on this poll")]
    AlreadyVoted,

    #[msg("Poll account does not match the derived address")]
    AddressMismatch,

    // Authorization errors
    #[msg("Only the poll owner can perform this action")]
    Unauthorized,

    // Deposit errors
    #[msg("Payer cannot cover the rent deposit")]
    InsufficientDeposit,

    // Input errors
    #[msg("Poll name cannot be empty")]
    EmptyName,

    #[msg("Poll name is too long")]
    NameTooLong,

    // State errors
    #[msg("Poll is closed")]
    PollClosed,

    // Arithmetic errors
    #[msg("Vote count overflow")]
    Overflow,
}
