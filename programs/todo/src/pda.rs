use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::TodoError;

/// Address of the todo `owner` created under `title`.
///
/// Clients call this before `create_todo` and the program calls it again to
/// check the account it was handed.
pub fn todo_address(owner: &Pubkey, title: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TODO_SEED, owner.as_ref(), title.as_bytes()], &crate::ID)
}

// Creation titles double as seeds, so they get the stricter seed limit
pub fn validate_label(title: &str) -> Result<()> {
    require!(!title.is_empty(), TodoError::EmptyTitle);
    require!(title.len() <= MAX_LABEL_LEN, TodoError::TitleTooLong);
    Ok(())
}

pub fn validate_title(title: &str) -> Result<()> {
    require!(!title.is_empty(), TodoError::EmptyTitle);
    require!(title.len() <= MAX_TITLE_LEN, TodoError::TitleTooLong);
    Ok(())
}

pub fn validate_description(description: &str) -> Result<()> {
    require!(
        description.len() <= MAX_DESCRIPTION_LEN,
        TodoError::DescriptionTooLong
    );
    Ok(())
}
