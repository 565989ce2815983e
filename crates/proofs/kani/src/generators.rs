//! Generators for arbitrary reachable ledgers (for Kani)
//!
//! Ledger fields are private, so arbitrary states are built by running
//! arbitrary transactions from genesis rather than by poking fields.

#[cfg(kani)]
use crate::adversary::*;
use fix_ledger::*;

/// Genesis shared by every proof: deployer is admin and sole minter at block 100
pub fn proof_genesis() -> Genesis {
    Genesis {
        admin: AccountId::from("deployer"),
        minters: vec![AccountId::from("deployer")],
        start_block: 100,
    }
}

/// Ledger with a funded admin pool, a second holder and an active schedule
pub fn seeded_ledger() -> Ledger {
    let mut s = Ledger::new(proof_genesis());
    let deployer = AccountId::from("deployer");
    let alice = AccountId::from("alice");
    let _ = mint(&mut s, &deployer, 100, &deployer, "");
    let _ = mint(&mut s, &deployer, 20, &alice, "");
    let _ = set_vesting_schedule(&mut s, &deployer, &alice, 100, 4, 40);
    s
}

#[cfg(kani)]
pub fn any_step_input() -> StepInput {
    kani::any()
}

/// Reachable ledger after up to two arbitrary steps from the seeded state
#[cfg(kani)]
pub fn any_ledger_bounded() -> Ledger {
    let mut s = seeded_ledger();
    let n: u8 = kani::any();
    for _ in 0..(n % 3) {
        let _ = run_step(&mut s, &any_step_input());
    }
    s
}
