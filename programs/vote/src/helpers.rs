use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};

use crate::errors::VoteError;

// Claim a PDA for this program.
//
// This is the only lock the program has: the address is either free and
// becomes ours, or it is occupied and the whole instruction fails with
// `occupied`. The runtime serializes writers of one address, so of two
// racing claims exactly one succeeds. A PDA that was only pre-funded with
// lamports still counts as free.
pub fn create_pda_account<'info>(
    payer: &Signer<'info>,
    target: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
    space: usize,
    signer_seeds: &[&[u8]],
    occupied: VoteError,
) -> Result<()> {
    if *target.owner != system_program.key() || !target.data_is_empty() {
        return Err(occupied.into());
    }

    let rent = Rent::get()?;
    let deposit = rent.minimum_balance(space);
    let current = target.lamports();
    let shortfall = deposit.saturating_sub(current);
    require!(
        can_fund(payer.lamports(), shortfall, rent.minimum_balance(payer.data_len())),
        VoteError::InsufficientDeposit
    );

    let seeds = &[signer_seeds];

    if current == 0 {
        create_account(
            CpiContext::new(
                system_program.to_account_info(),
                CreateAccount {
                    from: payer.to_account_info(),
                    to: target.clone(),
                },
            )
            .with_signer(seeds),
            deposit,
            space as u64,
            &crate::ID,
        )?;
        return Ok(());
    }

    if shortfall > 0 {
        transfer(
            CpiContext::new(
                system_program.to_account_info(),
                Transfer {
                    from: payer.to_account_info(),
                    to: target.clone(),
                },
            ),
            shortfall,
        )?;
    }

    allocate(
        CpiContext::new(
            system_program.to_account_info(),
            Allocate {
                account_to_allocate: target.clone(),
            },
        )
        .with_signer(seeds),
        space as u64,
    )?;

    assign(
        CpiContext::new(
            system_program.to_account_info(),
            Assign {
                account_to_assign: target.clone(),
            },
        )
        .with_signer(seeds),
        &crate::ID,
    )?;

    Ok(())
}

// The payer must stay rent exempt after paying, or be drained to exactly zero
fn can_fund(balance: u64, shortfall: u64, payer_floor: u64) -> bool {
    match balance.checked_sub(shortfall) {
        Some(0) => true,
        Some(left) => left >= payer_floor,
        None => false,
    }
}
