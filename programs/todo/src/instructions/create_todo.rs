use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, helpers::*, pda::*, state::*};

// Create Todo Instruction
//
// Allocates a TodoState at ["todo", owner, title].
// The account is created here rather than through `init` so that an
// occupied address surfaces as TodoError::AlreadyExists and an unfunded
// payer as TodoError::InsufficientDeposit.

#[derive(Accounts)]
pub struct CreateTodo<'info> {
    // Owner of the new todo; pays the rent deposit
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: must equal todo_address(owner, title); verified in the handler
    /// before anything is written
    #[account(mut)]
    pub todo: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateTodo<'info> {
    pub fn create_todo(&mut self, title: String, description: String) -> Result<()> {
        validate_label(&title)?;
        validate_description(&description)?;

        let owner = self.owner.key();
        let (expected, bump) = todo_address(&owner, &title);
        require_keys_eq!(self.todo.key(), expected, TodoError::AddressMismatch);

        let bump_seed = [bump];
        let signer_seeds: &[&[u8]] = &[TODO_SEED, owner.as_ref(), title.as_bytes(), &bump_seed];

        create_pda_account(
            &self.owner,
            &self.todo.to_account_info(),
            &self.system_program,
            TodoState::SPACE,
            signer_seeds,
        )?;

        let now = Clock::get()?.unix_timestamp;
        let todo = TodoState::new(owner, title, description, now, bump);

        let mut data = self.todo.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        todo.try_serialize(&mut writer)?;

        msg!("Created todo '{}' for {}", todo.title, owner);
        emit!(TodoCreated {
            todo: expected,
            owner,
            title: todo.title,
            created_on: now,
        });

        Ok(())
    }
}
