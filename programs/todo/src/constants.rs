use anchor_lang::prelude::*;

// Seeds for PDA derivation: ["todo", owner, title_at_creation]
#[constant]
pub const TODO_SEED: &[u8] = b"todo";

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Owner pubkey sits right after the discriminator.
// Clients list "my todos" with a memcmp filter at this offset.
pub const OWNER_OFFSET: usize = ANCHOR_DISCRIMINATOR;

// A PDA seed is capped at 32 bytes, so the creation title is too
pub const MAX_LABEL_LEN: usize = 32;

pub const MAX_TITLE_LEN: usize = 50;

pub const MAX_DESCRIPTION_LEN: usize = 200;
