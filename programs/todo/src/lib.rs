use anchor_lang::prelude::*;
pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod pda;
pub mod state;

pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use pda::*;
pub use state::*;

declare_id!("HYSgH9tCnpkZ1h2MrcSf6773jx36CiPYe4L3DmAdQYko");

#[program]
pub mod todo {
    use super::*;

    // Create a todo at ["todo", owner, title]
    // Fails if the owner already has a todo with this title
    pub fn create_todo(ctx: Context<CreateTodo>, title: String, description: String) -> Result<()> {
        ctx.accounts.create_todo(title, description)
    }

    // Replace any of title, description, is_active
    // Only the owner may update; the address does not change
    pub fn update_todo(
        ctx: Context<UpdateTodo>,
        title: Option<String>,
        description: Option<String>,
        is_active: Option<bool>,
    ) -> Result<()> {
        ctx.accounts.update_todo(title, description, is_active)
    }

    // Close the todo and return the deposit to the owner
    pub fn delete_todo(ctx: Context<DeleteTodo>) -> Result<()> {
        ctx.accounts.delete_todo()
    }
}
