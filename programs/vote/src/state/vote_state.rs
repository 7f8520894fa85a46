use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::VoteError;
use crate::pda::validate_name;

// Poll account
// Lives at ["vote", owner, label]
#[account]
#[derive(InitSpace)]
pub struct VoteState {
    // Poll admin; only this key may rename, close or delete
    pub owner: Pubkey,

    // Name the address was derived from, kept so renamed polls re-derive
    #[max_len(32)]
    pub label: String,

    #[max_len(50)]
    pub name: String,

    // Number of receipts issued for this poll
    // Only cast_vote touches it, one at a time
    pub count: u64,

    pub is_active: bool,

    pub created_on: i64,

    pub modified_on: i64,

    pub bump: u8,
}

impl VoteState {
    pub const SPACE: usize = ANCHOR_DISCRIMINATOR + Self::INIT_SPACE;

    pub fn new(owner: Pubkey, name: String, now: i64, bump: u8) -> Self {
        Self {
            owner,
            label: name.clone(),
            name,
            count: 0,
            is_active: true,
            created_on: now,
            modified_on: now,
            bump,
        }
    }

    // Rename and/or open/close. The count is not reachable from here.
    pub fn apply_update(
        &mut self,
        name: Option<String>,
        is_active: Option<bool>,
        now: i64,
    ) -> Result<()> {
        if let Some(name) = name {
            validate_name(&name)?;
            self.name = name;
        }
        if let Some(is_active) = is_active {
            self.is_active = is_active;
        }
        self.modified_on = now;
        Ok(())
    }

    // Count one vote. Callers must have claimed the voter's receipt in the
    // same instruction.
    pub fn record_vote(&mut self, now: i64) -> Result<()> {
        require!(self.is_active, VoteError::PollClosed);
        self.count = self.count.checked_add(1).ok_or(VoteError::Overflow)?;
        self.modified_on = now;
        Ok(())
    }
}

/// memcmp filter on the discriminator at offset 0, used to list all polls.
pub fn is_vote_state(data: &[u8]) -> bool {
    data.get(..ANCHOR_DISCRIMINATOR)
        .map(|bytes| bytes == VoteState::DISCRIMINATOR)
        .unwrap_or(false)
}

/// memcmp filter used by clients to list one owner's polls.
pub fn is_owned_by(data: &[u8], owner: &Pubkey) -> bool {
    data.get(OWNER_OFFSET..OWNER_OFFSET + 32)
        .map(|bytes| bytes == owner.as_ref())
        .unwrap_or(false)
}
