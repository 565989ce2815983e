//! Invariant checking helpers

use crate::state::*;

/// Supply never exceeds the hard cap
pub fn supply_within_cap(s: &Ledger) -> bool {
    s.total_minted <= MAX_SUPPLY
}

/// Sum of all balances, widened so the fold itself cannot overflow
pub fn sum_balances(s: &Ledger) -> u128 {
    s.balances
        .values()
        .fold(0u128, |acc, b| acc.saturating_add(u128::from(*b)))
}

/// Balances and supply move in lockstep: sum(balances) == total_minted
pub fn supply_conserved(s: &Ledger) -> bool {
    sum_balances(s) == u128::from(s.total_minted)
}

/// Mint ids are exactly 1..=mint_counter
pub fn mint_counter_consistent(s: &Ledger) -> bool {
    let ids_dense = s
        .mint_records
        .keys()
        .zip(1u64..)
        .all(|(id, expected)| *id == expected);
    let len_matches = u64::try_from(s.mint_records.len()).map_or(false, |n| n == s.mint_counter);
    let last_matches = s.mint_records.keys().next_back().copied().unwrap_or(0) == s.mint_counter;
    ids_dense && len_matches && last_matches
}

/// Every schedule is well-formed and has never paid out more than its total
pub fn vesting_within_bounds(s: &Ledger) -> bool {
    s.vesting_schedules.values().all(|v| {
        v.duration_blocks > 0 && v.total_amount > 0 && v.claimed_amount <= v.total_amount
    })
}

pub fn all_invariants_hold(s: &Ledger) -> bool {
    supply_within_cap(s)
        && supply_conserved(s)
        && mint_counter_consistent(s)
        && vesting_within_bounds(s)
}

/// Names of violated invariants, empty when the ledger is consistent
pub fn violated_invariants(s: &Ledger) -> Vec<&'static str> {
    let checks: [(&'static str, fn(&Ledger) -> bool); 4] = [
        ("supply_within_cap", supply_within_cap),
        ("supply_conserved", supply_conserved),
        ("mint_counter_consistent", mint_counter_consistent),
        ("vesting_within_bounds", vesting_within_bounds),
    ];
    checks
        .iter()
        .filter(|(_, check)| !check(s))
        .map(|(name, _)| *name)
        .collect()
}

/// Transfers and claims never change the total held
pub fn balances_sum_unchanged(before: &Ledger, after: &Ledger) -> bool {
    sum_balances(before) == sum_balances(after)
}

/// A rejected transaction must leave every field, journal included, as it was
pub fn ledger_unchanged(before: &Ledger, after: &Ledger) -> bool {
    before == after
}
