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

declare_id!("6E7BxM2i1XEo35Dj9wUzwkxKCWp9ssbGMQ1FjyNzTk55");

#[program]
pub mod vote {
    use super::*;

    // Open a poll at ["vote", admin, name] with count 0
    pub fn create_vote(ctx: Context<CreateVote>, name: String) -> Result<()> {
        ctx.accounts.create_vote(name)
    }

    // Rename and/or open/close a poll
    // Only the owner may update; the count is untouched
    pub fn update_vote(
        ctx: Context<UpdateVote>,
        name: Option<String>,
        is_active: Option<bool>,
    ) -> Result<()> {
        ctx.accounts.update_vote(name, is_active)
    }

    // Vote once on an open poll
    // The voter's receipt PDA is the double-vote lock
    pub fn cast_vote(ctx: Context<CastVote>) -> Result<()> {
        ctx.accounts.cast_vote(&ctx.bumps)
    }

    // Close the poll and return the deposit to the owner
    pub fn delete_vote(ctx: Context<DeleteVote>) -> Result<()> {
        ctx.accounts.delete_vote()
    }
}
