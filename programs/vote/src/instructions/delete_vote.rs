use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, state::*};

// Delete Vote Instruction
//
// Owner-only. Closes the poll and returns its deposit to the owner.
// Receipts issued for the poll are left in place.

#[derive(Accounts)]
pub struct DeleteVote<'info> {
    #[account(
        mut,
        seeds = [VOTE_SEED, vote.owner.as_ref(), vote.label.as_bytes()],
        bump = vote.bump,
        has_one = owner @ VoteError::Unauthorized,
        close = owner,
    )]
    pub vote: Account<'info, VoteState>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

impl<'info> DeleteVote<'info> {
    pub fn delete_vote(&mut self) -> Result<()> {
        msg!(
            "Deleting poll '{}' with {} votes",
            self.vote.name,
            self.vote.count
        );
        emit!(PollDeleted {
            poll: self.vote.key(),
            owner: self.owner.key(),
            final_count: self.vote.count,
        });

        Ok(())
    }
}
