//! Bounds-checked arithmetic - no wraparound, no panics

use crate::error::{LedgerError, LedgerResult};
use crate::state::{Amount, MAX_SUPPLY};

/// Add to a balance; overflow is rejected rather than wrapped
pub fn credit(balance: Amount, amount: Amount) -> LedgerResult<Amount> {
    balance
        .checked_add(amount)
        .ok_or(LedgerError::ArithmeticOverflow)
}

/// Subtract from a balance; going below zero is an insufficient balance
pub fn debit(balance: Amount, amount: Amount) -> LedgerResult<Amount> {
    balance
        .checked_sub(amount)
        .ok_or(LedgerError::InsufficientBalance)
}

/// Prospective supply after minting `amount`, rejected above `MAX_SUPPLY`
pub fn grow_supply(total: Amount, amount: Amount) -> LedgerResult<Amount> {
    match total.checked_add(amount) {
        Some(new_total) if new_total <= MAX_SUPPLY => Ok(new_total),
        _ => Err(LedgerError::MaxSupplyReached),
    }
}

/// Supply after burning `amount`
pub fn shrink_supply(total: Amount, amount: Amount) -> LedgerResult<Amount> {
    total
        .checked_sub(amount)
        .ok_or(LedgerError::InsufficientBalance)
}

/// Floor division for a positive divisor (rounds toward negative infinity)
pub fn floor_div_i128(a: i128, b: i128) -> i128 {
    if b <= 0 {
        return 0;
    }
    a.div_euclid(b)
}

/// Signed difference of two block heights
pub fn signed_delta(a: u64, b: u64) -> i128 {
    i128::from(a) - i128::from(b)
}

/// Convert a strictly positive i128 into an amount
pub fn positive_amount(x: i128) -> Option<Amount> {
    if x > 0 {
        Amount::try_from(x).ok()
    } else {
        None
    }
}
