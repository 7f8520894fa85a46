use anchor_lang::prelude::*;

use crate::state::TodoState;

#[event]
pub struct TodoCreated {
    pub todo: Pubkey,
    pub owner: Pubkey,
    pub title: String,
    pub created_on: i64,
}

#[event]
pub struct TodoUpdated {
    pub todo: Pubkey,
    pub owner: Pubkey,
    pub title: String,
    pub description: String,
    pub is_active: bool,
    pub modified_on: i64,
}

impl TodoUpdated {
    // Snapshot of the record after an update
    pub fn from_record(todo: Pubkey, record: &TodoState) -> Self {
        Self {
            todo,
            owner: record.owner,
            title: record.title.clone(),
            description: record.description.clone(),
            is_active: record.is_active,
            modified_on: record.modified_on,
        }
    }
}

#[event]
pub struct TodoDeleted {
    pub todo: Pubkey,
    pub owner: Pubkey,
}
