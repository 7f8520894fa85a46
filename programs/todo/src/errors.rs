use anchor_lang::prelude::*;

#[error_code]
pub enum TodoError {
    // Occupancy errors
    #[msg("A todo with this title already exists for this owner")]
    AlreadyExists,

    #[msg("Todo account does not match the derived address")]
    AddressMismatch,

    // Authorization errors
    #[msg("Only the owner can modify this todo")]
    Unauthorized,

    // Deposit errors
    #[msg("Payer cannot cover the rent deposit for a new todo")]
    InsufficientDeposit,

    // Input errors
    #[msg("Title cannot be empty")]
    EmptyTitle,

    #[msg("Title is too long")]
    TitleTooLong,

    #[msg("Description is too long")]
    DescriptionTooLong,
}
