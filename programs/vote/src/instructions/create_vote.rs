use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, helpers::*, pda::*, state::*};

// Create Vote Instruction
//
// Opens a poll at ["vote", admin, name] with a zero count.

#[derive(Accounts)]
pub struct CreateVote<'info> {
    /// CHECK: must equal vote_address(admin, name); verified in the handler
    #[account(mut)]
    pub vote: UncheckedAccount<'info>,

    // Poll owner; pays the rent deposit
    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateVote<'info> {
    pub fn create_vote(&mut self, name: String) -> Result<()> {
        validate_label(&name)?;

        let admin = self.admin.key();
        let (expected, bump) = vote_address(&admin, &name);
        require_keys_eq!(self.vote.key(), expected, VoteError::AddressMismatch);

        let bump_seed = [bump];
        let signer_seeds: &[&[u8]] = &[VOTE_SEED, admin.as_ref(), name.as_bytes(), &bump_seed];

        create_pda_account(
            &self.admin,
            &self.vote.to_account_info(),
            &self.system_program,
            VoteState::SPACE,
            signer_seeds,
            VoteError::AlreadyExists,
        )?;

        let now = Clock::get()?.unix_timestamp;
        let poll = VoteState::new(admin, name, now, bump);

        let mut data = self.vote.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        poll.try_serialize(&mut writer)?;

        msg!("Created poll '{}' owned by {}", poll.name, admin);
        emit!(PollCreated {
            poll: expected,
            owner: admin,
            name: poll.name,
            created_on: now,
        });

        Ok(())
    }
}
