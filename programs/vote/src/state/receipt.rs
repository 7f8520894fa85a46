use anchor_lang::prelude::*;

use crate::constants::ANCHOR_DISCRIMINATOR;

// Vote receipt
// Lives at ["receipt", poll, voter]. Existence means "voter has voted on
// poll"; the fields only let an indexer attribute it. Never updated or
// closed, so a voter can never vote on the same poll address twice.
#[account]
#[derive(InitSpace)]
pub struct VoteReceipt {
    pub poll: Pubkey,
    pub voter: Pubkey,
    pub cast_on: i64,
    pub bump: u8,
}

impl VoteReceipt {
    pub const SPACE: usize = ANCHOR_DISCRIMINATOR + Self::INIT_SPACE;
}
