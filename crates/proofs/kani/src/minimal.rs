//! Minimal Kani proofs using concrete values
//! Pin down the reference scenarios before generalizing

use fix_ledger::*;
use crate::generators::proof_genesis;

/// Half-way and full vesting claims against a funded admin pool
#[kani::proof]
#[kani::unwind(4)]
fn concrete_vesting_halves() {
    let mut s = Ledger::new(proof_genesis());
    let deployer = AccountId::from("deployer");
    let user = AccountId::from("alice");
    let _ = mint(&mut s, &deployer, 10_000, &deployer, "");
    let _ = set_vesting_schedule(&mut s, &deployer, &user, 100, 100, 1000);

    advance_block(&mut s, 50);
    kani::assert(claim_vesting(&mut s, &user) == Ok(500), "first half");
    advance_block(&mut s, 50);
    kani::assert(claim_vesting(&mut s, &user) == Ok(500), "second half");
    kani::assert(
        claim_vesting(&mut s, &user) == Err(LedgerError::VestingLocked),
        "nothing left"
    );
}

/// Minting exactly to the cap succeeds, one more unit fails
#[kani::proof]
fn concrete_supply_cap() {
    let mut s = Ledger::new(proof_genesis());
    let deployer = AccountId::from("deployer");
    kani::assert(mint(&mut s, &deployer, MAX_SUPPLY, &deployer, "").is_ok(), "mint to cap");
    kani::assert(
        mint(&mut s, &deployer, 1, &deployer, "") == Err(LedgerError::MaxSupplyReached),
        "cap reached"
    );
}

/// An unrevoked delegation blocks a second one even after expiry
#[kani::proof]
fn concrete_delegation_presence() {
    let mut s = Ledger::new(proof_genesis());
    let a = AccountId::from("alice");
    let b = AccountId::from("bob");
    kani::assert(delegate(&mut s, &a, &b, 101).is_ok(), "first delegation");
    advance_block(&mut s, 10);
    kani::assert(
        delegate(&mut s, &a, &b, 500) == Err(LedgerError::DelegationActive),
        "expired but present"
    );
    kani::assert(revoke_delegation(&mut s, &a).is_ok(), "revoke");
    kani::assert(s.delegation_of(&a).is_none(), "gone after revoke");
}
