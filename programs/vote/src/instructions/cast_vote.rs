use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

// Cast Vote Instruction
//
// One vote per (poll, voter):
// 1. claim the receipt PDA ["receipt", poll, voter]; an existing receipt
//    fails the instruction with AlreadyVoted
// 2. add one to the poll count
//
// Both happen in this instruction, so a receipt without its increment (or
// the reverse) is never committed.

#[derive(Accounts)]
pub struct CastVote<'info> {
    #[account(
        mut,
        seeds = [VOTE_SEED, vote.owner.as_ref(), vote.label.as_bytes()],
        bump = vote.bump,
    )]
    pub vote: Account<'info, VoteState>,

    /// CHECK: receipt lock; address pinned by seeds, created in the handler
    #[account(
        mut,
        seeds = [RECEIPT_SEED, vote.key().as_ref(), voter.key().as_ref()],
        bump,
    )]
    pub receipt: UncheckedAccount<'info>,

    // Voter; pays the receipt deposit
    #[account(mut)]
    pub voter: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> CastVote<'info> {
    pub fn cast_vote(&mut self, bumps: &CastVoteBumps) -> Result<()> {
        let poll = self.vote.key();
        let voter = self.voter.key();

        let bump_seed = [bumps.receipt];
        let signer_seeds: &[&[u8]] = &[RECEIPT_SEED, poll.as_ref(), voter.as_ref(), &bump_seed];

        create_pda_account(
            &self.voter,
            &self.receipt.to_account_info(),
            &self.system_program,
            VoteReceipt::SPACE,
            signer_seeds,
            VoteError::AlreadyVoted,
        )?;

        let now = Clock::get()?.unix_timestamp;
        let receipt = VoteReceipt {
            poll,
            voter,
            cast_on: now,
            bump: bumps.receipt,
        };
        {
            let mut data = self.receipt.try_borrow_mut_data()?;
            let mut writer: &mut [u8] = &mut data[..];
            receipt.try_serialize(&mut writer)?;
        }

        self.vote.record_vote(now)?;

        msg!("{} voted on '{}', count {}", voter, self.vote.name, self.vote.count);
        emit!(VoteCast {
            poll,
            voter,
            receipt: self.receipt.key(),
            count: self.vote.count,
            cast_on: now,
        });

        Ok(())
    }
}
