use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::VoteError;

/// Address of the poll `owner` created under `name`.
pub fn vote_address(owner: &Pubkey, name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VOTE_SEED, owner.as_ref(), name.as_bytes()], &crate::ID)
}

/// Address of the receipt marking that `voter` has voted on `poll`.
///
/// Whether this account exists is the whole "has voted" flag.
pub fn receipt_address(poll: &Pubkey, voter: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[RECEIPT_SEED, poll.as_ref(), voter.as_ref()], &crate::ID)
}

pub fn validate_label(name: &str) -> Result<()> {
    require!(!name.is_empty(), VoteError::EmptyName);
    require!(name.len() <= MAX_LABEL_LEN, VoteError::NameTooLong);
    Ok(())
}

pub fn validate_name(name: &str) -> Result<()> {
    require!(!name.is_empty(), VoteError::EmptyName);
    require!(name.len() <= MAX_NAME_LEN, VoteError::NameTooLong);
    Ok(())
}
