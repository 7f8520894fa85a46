use anchor_lang::prelude::*;

use crate::constants::*;
use crate::pda::{validate_description, validate_title};

// Todo record
// Lives at ["todo", owner, label] and is only ever mutated by `owner`
#[account]
#[derive(InitSpace)]
pub struct TodoState {
    // Creator; compared against the signer on every update and delete
    pub owner: Pubkey,

    // Title the address was derived from. Never changes, so the record can
    // still be re-derived after a rename.
    #[max_len(32)]
    pub label: String,

    #[max_len(50)]
    pub title: String,

    #[max_len(200)]
    pub description: String,

    pub is_active: bool,

    pub created_on: i64,

    pub modified_on: i64,

    // Canonical PDA bump
    pub bump: u8,
}

impl TodoState {
    pub const SPACE: usize = ANCHOR_DISCRIMINATOR + Self::INIT_SPACE;

    pub fn new(
        owner: Pubkey,
        title: String,
        description: String,
        now: i64,
        bump: u8,
    ) -> Self {
        Self {
            owner,
            label: title.clone(),
            title,
            description,
            is_active: true,
            created_on: now,
            modified_on: now,
            bump,
        }
    }

    // Replace whichever fields were supplied. The address is untouched.
    pub fn apply_update(
        &mut self,
        title: Option<String>,
        description: Option<String>,
        is_active: Option<bool>,
        now: i64,
    ) -> Result<()> {
        if let Some(title) = title {
            validate_title(&title)?;
            self.title = title;
        }
        if let Some(description) = description {
            validate_description(&description)?;
            self.description = description;
        }
        if let Some(is_active) = is_active {
            self.is_active = is_active;
        }
        self.modified_on = now;
        Ok(())
    }
}

/// memcmp filter on the discriminator at offset 0, used to list all todos.
pub fn is_todo_state(data: &[u8]) -> bool {
    data.get(..ANCHOR_DISCRIMINATOR)
        .map(|bytes| bytes == TodoState::DISCRIMINATOR)
        .unwrap_or(false)
}

/// memcmp filter used by clients to list one owner's todos.
pub fn is_owned_by(data: &[u8], owner: &Pubkey) -> bool {
    data.get(OWNER_OFFSET..OWNER_OFFSET + 32)
        .map(|bytes| bytes == owner.as_ref())
        .unwrap_or(false)
}
