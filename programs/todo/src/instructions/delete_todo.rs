use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, state::*};

// Delete Todo Instruction
//
// Owner-only. Anchor closes the account (close = owner) after the handler
// returns, sending the rent deposit back to the owner.

#[derive(Accounts)]
pub struct DeleteTodo<'info> {
    #[account(
        mut,
        seeds = [TODO_SEED, todo.owner.as_ref(), todo.label.as_bytes()],
        bump = todo.bump,
        has_one = owner @ TodoError::Unauthorized,
        close = owner,
    )]
    pub todo: Account<'info, TodoState>,

    // Receives the reclaimed deposit
    #[account(mut)]
    pub owner: Signer<'info>,
}

impl<'info> DeleteTodo<'info> {
    pub fn delete_todo(&mut self) -> Result<()> {
        msg!("Deleting todo '{}'", self.todo.label);
        emit!(TodoDeleted {
            todo: self.todo.key(),
            owner: self.owner.key(),
        });

        Ok(())
    }
}
