use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, state::*};

// Update Todo Instruction
//
// Owner-only. Any of title, description and is_active may be replaced.
// A rename does not move the record: the address stays tied to `label`.

#[derive(Accounts)]
pub struct UpdateTodo<'info> {
    #[account(
        mut,
        seeds = [TODO_SEED, todo.owner.as_ref(), todo.label.as_bytes()],
        bump = todo.bump,
        has_one = owner @ TodoError::Unauthorized,
    )]
    pub todo: Account<'info, TodoState>,

    pub owner: Signer<'info>,
}

impl<'info> UpdateTodo<'info> {
    pub fn update_todo(
        &mut self,
        title: Option<String>,
        description: Option<String>,
        is_active: Option<bool>,
    ) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        self.todo.apply_update(title, description, is_active, now)?;

        msg!("Updated todo '{}'", self.todo.label);
        emit!(TodoUpdated::from_record(self.todo.key(), &self.todo));

        Ok(())
    }
}
