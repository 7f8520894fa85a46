// Test utilities for the todo program

#![allow(dead_code)]

use anchor_lang::AccountDeserialize;
use litesvm::{types::TransactionResult, LiteSVM};
use sha2::{Digest, Sha256};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use solana_system_interface::program::ID as system_program;

// Program ID matching declare_id!
pub const TODO_PROGRAM_ID: Pubkey = Pubkey::new_from_array(todo::ID.to_bytes());

// PDA Seeds
pub const TODO_SEED: &[u8] = b"todo";

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let hash = Sha256::digest(format!("global:{}", method).as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash[..8]);
    discriminator
}

// Setup LiteSVM with the todo program
// The binary comes from `anchor build` at the workspace root
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!("../../../target/deploy/todo.so");
    svm.add_program(TODO_PROGRAM_ID, program_bytes)
        .expect("Todo program should load");
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Derive todo PDA
pub fn derive_todo_pda(owner: &Pubkey, title: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[TODO_SEED, owner.as_ref(), title.as_bytes()],
        &TODO_PROGRAM_ID,
    )
}

// Sign and send, expiring the blockhash first so that a repeated
// instruction is a fresh transaction rather than a duplicate signature
pub fn send(
    svm: &mut LiteSVM,
    instructions: &[Instruction],
    payer: &Keypair,
    signers: &[&Keypair],
) -> TransactionResult {
    svm.expire_blockhash();
    let tx = Transaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    svm.send_transaction(tx)
}

// Fetch and decode a todo; None when nothing lives at the address
pub fn fetch_todo(svm: &LiteSVM, address: &Pubkey) -> Option<todo::TodoState> {
    let account = svm.get_account(address)?;
    if account.lamports == 0 || account.data.is_empty() {
        return None;
    }
    let todo = todo::TodoState::try_deserialize(&mut account.data.as_slice())
        .expect("Todo account should decode");
    Some(todo)
}

pub fn lamports(svm: &LiteSVM, address: &Pubkey) -> u64 {
    svm.get_account(address).map(|a| a.lamports).unwrap_or(0)
}

// Assert that the transaction failed with the given custom program error
pub fn assert_custom_error(result: TransactionResult, code: u32) {
    let failure = match result {
        Ok(_) => panic!("Transaction should fail with custom error {}", code),
        Err(failure) => failure,
    };
    let rendered = format!("{:?}", failure.err);
    assert!(
        rendered.contains(&format!("Custom({})", code)),
        "Expected custom error {}, got {}\nlogs: {:#?}",
        code,
        rendered,
        failure.meta.logs
    );
}

pub fn todo_error(err: todo::TodoError) -> u32 {
    u32::from(err)
}

// Anchor's code for an account that was never created (or was closed)
pub fn not_found() -> u32 {
    anchor_lang::error::ErrorCode::AccountNotInitialized as u32
}

// Set the SVM clock to an absolute unix timestamp
pub fn set_time(svm: &mut LiteSVM, unix_timestamp: i64) {
    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp = unix_timestamp;
    svm.set_sysvar(&clock);
}

// Advance the SVM clock by the specified number of seconds
pub fn advance_time(svm: &mut LiteSVM, seconds: u64) {
    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp += seconds as i64;
    svm.set_sysvar(&clock);

    let current_slot = clock.slot;
    svm.warp_to_slot(current_slot + (seconds * 2) + 5);
}

// ======================== INSTRUCTION BUILDERS ========================

// Build create_todo instruction for an explicit todo account
pub fn build_create_todo_ix_at(
    owner: &Pubkey,
    todo: &Pubkey,
    title: &str,
    description: &str,
) -> Instruction {
    let mut data = anchor_discriminator("create_todo").to_vec();
    data.extend(borsh::to_vec(&(title.to_string(), description.to_string())).unwrap());

    Instruction {
        program_id: TODO_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*owner, true),
            AccountMeta::new(*todo, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build create_todo instruction at the derived address
pub fn build_create_todo_ix(owner: &Pubkey, title: &str, description: &str) -> Instruction {
    let (todo, _) = derive_todo_pda(owner, title);
    build_create_todo_ix_at(owner, &todo, title, description)
}

// Build update_todo instruction
pub fn build_update_todo_ix(
    owner: &Pubkey,
    todo: &Pubkey,
    title: Option<&str>,
    description: Option<&str>,
    is_active: Option<bool>,
) -> Instruction {
    let args = (
        title.map(str::to_string),
        description.map(str::to_string),
        is_active,
    );
    let mut data = anchor_discriminator("update_todo").to_vec();
    data.extend(borsh::to_vec(&args).unwrap());

    Instruction {
        program_id: TODO_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*todo, false),
            AccountMeta::new_readonly(*owner, true),
        ],
        data,
    }
}

// Build delete_todo instruction
pub fn build_delete_todo_ix(owner: &Pubkey, todo: &Pubkey) -> Instruction {
    Instruction {
        program_id: TODO_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*todo, false),
            AccountMeta::new(*owner, true),
        ],
        data: anchor_discriminator("delete_todo").to_vec(),
    }
}
