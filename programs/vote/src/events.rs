use anchor_lang::prelude::*;

#[event]
pub struct PollCreated {
    pub poll: Pubkey,
    pub owner: Pubkey,
    pub name: String,
    pub created_on: i64,
}

#[event]
pub struct PollUpdated {
    pub poll: Pubkey,
    pub name: String,
    pub is_active: bool,
    pub modified_on: i64,
}

#[event]
pub struct PollDeleted {
    pub poll: Pubkey,
    pub owner: Pubkey,
    pub final_count: u64,
}

#[event]
pub struct VoteCast {
    pub poll: Pubkey,
    pub voter: Pubkey,
    pub receipt: Pubkey,
    pub count: u64,
    pub cast_on: i64,
}
