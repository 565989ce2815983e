//! Kani safety proofs for the ledger invariants

use fix_ledger::*;
use crate::{adversary::*, generators::*};

/// Supply never exceeds the cap across short adversarial sequences
#[kani::proof]
#[kani::unwind(6)]
fn supply_bounded_across_adversary_sequences() {
    let mut s = seeded_ledger();
    let steps: u8 = kani::any();
    for _ in 0..(steps as usize % MAX_STEPS) + 1 {
        adversary_step(&mut s);
        kani::assert(supply_within_cap(&s), "total_minted must stay within MAX_SUPPLY");
    }
}

/// Balances and supply move in lockstep
#[kani::proof]
#[kani::unwind(6)]
fn conservation_holds_across_adversary_sequences() {
    let mut s = seeded_ledger();
    kani::assume(supply_conserved(&s));
    let steps: u8 = kani::any();
    for _ in 0..(steps as usize % MAX_STEPS) + 1 {
        adversary_step(&mut s);
        kani::assert(supply_conserved(&s), "sum(balances) must equal total_minted");
    }
}

/// Mint ids stay dense and the counter tracks the last one
#[kani::proof]
#[kani::unwind(6)]
fn mint_counter_tracks_records() {
    let mut s = any_ledger_bounded();
    adversary_step(&mut s);
    kani::assert(mint_counter_consistent(&s), "mint ids must be exactly 1..=mint_counter");
}

/// A rejected transaction is a no-op, journal included
#[kani::proof]
#[kani::unwind(6)]
fn rejected_step_is_noop() {
    let mut s = any_ledger_bounded();
    let before = s.clone();
    let (_, result) = run_step(&mut s, &any_step_input());
    if result.is_err() {
        kani::assert(ledger_unchanged(&before, &s), "rejected transaction must not mutate");
    }
}

/// Only the admin can flip the pause switch or change authority
#[kani::proof]
#[kani::unwind(6)]
fn non_admin_cannot_administer() {
    let mut s = any_ledger_bounded();
    let caller = account(kani::any());
    kani::assume(caller != *s.admin());
    let before = s.clone();

    let target = account(kani::any());
    kani::assert(pause(&mut s, &caller).is_err(), "non-admin pause must fail");
    kani::assert(add_minter(&mut s, &caller, &target).is_err(), "non-admin add_minter must fail");
    kani::assert(set_admin(&mut s, &caller, &target).is_err(), "non-admin set_admin must fail");
    kani::assert(ledger_unchanged(&before, &s), "non-admin calls must not mutate");
}

/// While paused, transfers, mints and burns cannot move balances
#[kani::proof]
#[kani::unwind(6)]
fn paused_ledger_freezes_supply_moves() {
    let mut s = seeded_ledger();
    let deployer = AccountId::from("deployer");
    let _ = pause(&mut s, &deployer);
    let before = s.clone();

    let mut input = any_step_input();
    input.step %= 3; // Transfer, Mint or Burn
    let (_, result) = run_step(&mut s, &input);
    kani::assert(result == Err(LedgerError::Paused), "paused ledger must reject");
    kani::assert(balances_sum_unchanged(&before, &s), "paused ledger must not move balances");
}

/// Claims never push claimed_amount past total_amount
#[kani::proof]
#[kani::unwind(6)]
fn vesting_claims_bounded() {
    let mut s = seeded_ledger();
    let alice = AccountId::from("alice");
    let blocks: u8 = kani::any();
    advance_block(&mut s, u64::from(blocks));
    let _ = claim_vesting(&mut s, &alice);
    kani::assert(vesting_within_bounds(&s), "claimed_amount must not exceed total_amount");
}
