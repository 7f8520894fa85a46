use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, state::*};

// Update Vote Instruction
//
// Owner-only rename and/or open/close. The count cannot be set here.

#[derive(Accounts)]
pub struct UpdateVote<'info> {
    #[account(
        mut,
        seeds = [VOTE_SEED, vote.owner.as_ref(), vote.label.as_bytes()],
        bump = vote.bump,
        has_one = owner @ VoteError::Unauthorized,
    )]
    pub vote: Account<'info, VoteState>,

    pub owner: Signer<'info>,
}

impl<'info> UpdateVote<'info> {
    pub fn update_vote(&mut self, name: Option<String>, is_active: Option<bool>) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        self.vote.apply_update(name, is_active, now)?;

        msg!(
            "Updated poll '{}' (active: {})",
            self.vote.name,
            self.vote.is_active
        );
        emit!(PollUpdated {
            poll: self.vote.key(),
            name: self.vote.name.clone(),
            is_active: self.vote.is_active,
            modified_on: now,
        });

        Ok(())
    }
}
