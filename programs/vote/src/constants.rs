use anchor_lang::prelude::*;

// Seeds for PDA derivation: ["vote", owner, name_at_creation]
#[constant]
pub const VOTE_SEED: &[u8] = b"vote";

// Seeds for PDA derivation: ["receipt", poll, voter]
#[constant]
pub const RECEIPT_SEED: &[u8] = b"receipt";

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Owner pubkey offset inside a poll account, for memcmp listing
pub const OWNER_OFFSET: usize = ANCHOR_DISCRIMINATOR;

// Creation names are PDA seeds and share the 32 byte seed limit
pub const MAX_LABEL_LEN: usize = 32;

pub const MAX_NAME_LEN: usize = 50;
