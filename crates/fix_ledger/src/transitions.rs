//! State transition functions - validate everything, then mutate
//!
//! Each transaction either applies completely and appends one journal entry,
//! or returns an error with the ledger untouched.

use crate::error::{LedgerError, LedgerResult};
use crate::events::{JournalEntry, LedgerEvent};
use crate::math::*;
use crate::state::*;

fn rejected(op: &'static str, err: LedgerError) -> LedgerError {
    log::debug!("{} rejected: {} (code {})", op, err, err.code());
    err
}

fn require(cond: bool, op: &'static str, err: LedgerError) -> LedgerResult<()> {
    if cond {
        Ok(())
    } else {
        Err(rejected(op, err))
    }
}

fn require_admin(s: &Ledger, caller: &AccountId, op: &'static str) -> LedgerResult<()> {
    require(*caller == s.admin, op, LedgerError::Unauthorized)
}

fn record(s: &mut Ledger, event: LedgerEvent) {
    log::debug!("block {}: applied {:?}", s.block_height, event);
    s.journal.push(JournalEntry {
        block_height: s.block_height,
        event,
    });
}

/// Advance the external clock. Only the harness calls this, never a transaction.
pub fn advance_block(s: &mut Ledger, blocks: BlockHeight) {
    s.block_height = s.block_height.saturating_add(blocks);
}

/// Move `amount` from `sender` to `recipient`; supply unchanged
pub fn transfer(
    s: &mut Ledger,
    caller: &AccountId,
    amount: Amount,
    sender: &AccountId,
    recipient: &AccountId,
) -> LedgerResult<()> {
    const OP: &str = "transfer";
    require(!s.paused, OP, LedgerError::Paused)?;
    require(caller == sender, OP, LedgerError::Unauthorized)?;
    require(amount > 0, OP, LedgerError::InvalidAmount)?;
    require(recipient != sender, OP, LedgerError::InvalidRecipient)?;

    let sender_after = debit(s.balance_of(sender), amount).map_err(|e| rejected(OP, e))?;
    let recipient_after = credit(s.balance_of(recipient), amount).map_err(|e| rejected(OP, e))?;

    s.balances.insert(sender.clone(), sender_after);
    s.balances.insert(recipient.clone(), recipient_after);
    record(
        s,
        LedgerEvent::Transfer {
            from: sender.clone(),
            to: recipient.clone(),
            amount,
        },
    );
    Ok(())
}

/// Create `amount` new tokens for `recipient` and store a mint record
pub fn mint(
    s: &mut Ledger,
    caller: &AccountId,
    amount: Amount,
    recipient: &AccountId,
    metadata: &str,
) -> LedgerResult<MintId> {
    const OP: &str = "mint";
    // Prospective total is computed up front but only applied after every check
    let new_total = grow_supply(s.total_minted, amount);

    require(!s.paused, OP, LedgerError::Paused)?;
    require(s.is_minter(caller), OP, LedgerError::InvalidMinter)?;
    require(amount > 0, OP, LedgerError::InvalidAmount)?;
    require(
        metadata.encode_utf16().count() <= MAX_METADATA_LEN,
        OP,
        LedgerError::MetadataTooLong,
    )?;
    let new_total = new_total.map_err(|e| rejected(OP, e))?;
    let recipient_after = credit(s.balance_of(recipient), amount).map_err(|e| rejected(OP, e))?;
    let mint_id = s
        .mint_counter
        .checked_add(1)
        .ok_or_else(|| rejected(OP, LedgerError::ArithmeticOverflow))?;

    s.balances.insert(recipient.clone(), recipient_after);
    s.total_minted = new_total;
    s.mint_records.insert(
        mint_id,
        MintRecord {
            amount,
            recipient: recipient.clone(),
            metadata: metadata.to_owned(),
            timestamp: s.block_height,
        },
    );
    s.mint_counter = mint_id;
    record(
        s,
        LedgerEvent::Mint {
            id: mint_id,
            recipient: recipient.clone(),
            amount,
        },
    );
    Ok(mint_id)
}

/// Destroy `amount` of the caller's own tokens
pub fn burn(s: &mut Ledger, caller: &AccountId, amount: Amount) -> LedgerResult<()> {
    const OP: &str = "burn";
    require(!s.paused, OP, LedgerError::Paused)?;
    require(amount > 0, OP, LedgerError::InvalidAmount)?;

    let caller_after = debit(s.balance_of(caller), amount).map_err(|e| rejected(OP, e))?;
    let new_total = shrink_supply(s.total_minted, amount).map_err(|e| rejected(OP, e))?;

    s.balances.insert(caller.clone(), caller_after);
    s.total_minted = new_total;
    record(
        s,
        LedgerEvent::Burn {
            account: caller.clone(),
            amount,
        },
    );
    Ok(())
}

pub fn add_minter(s: &mut Ledger, caller: &AccountId, target: &AccountId) -> LedgerResult<()> {
    const OP: &str = "add_minter";
    require_admin(s, caller, OP)?;
    require(!s.is_minter(target), OP, LedgerError::AlreadyRegistered)?;

    s.minters.insert(target.clone(), true);
    record(
        s,
        LedgerEvent::MinterAdded {
            minter: target.clone(),
        },
    );
    Ok(())
}

/// Revoke minting authority; the entry is kept with the flag cleared
pub fn remove_minter(s: &mut Ledger, caller: &AccountId, target: &AccountId) -> LedgerResult<()> {
    require_admin(s, caller, "remove_minter")?;

    s.minters.insert(target.clone(), false);
    record(
        s,
        LedgerEvent::MinterRemoved {
            minter: target.clone(),
        },
    );
    Ok(())
}

pub fn pause(s: &mut Ledger, caller: &AccountId) -> LedgerResult<()> {
    require_admin(s, caller, "pause")?;
    s.paused = true;
    record(s, LedgerEvent::Paused);
    Ok(())
}

pub fn unpause(s: &mut Ledger, caller: &AccountId) -> LedgerResult<()> {
    require_admin(s, caller, "unpause")?;
    s.paused = false;
    record(s, LedgerEvent::Unpaused);
    Ok(())
}

/// Immediate single-step authority handoff
pub fn set_admin(s: &mut Ledger, caller: &AccountId, new_admin: &AccountId) -> LedgerResult<()> {
    require_admin(s, caller, "set_admin")?;
    let previous = std::mem::replace(&mut s.admin, new_admin.clone());
    record(
        s,
        LedgerEvent::AdminChanged {
            previous,
            admin: new_admin.clone(),
        },
    );
    Ok(())
}

/// Assign (or overwrite) a linear schedule for `recipient`. No tokens move here;
/// claims are funded from the admin balance at claim time.
pub fn set_vesting_schedule(
    s: &mut Ledger,
    caller: &AccountId,
    recipient: &AccountId,
    start_block: BlockHeight,
    duration_blocks: BlockHeight,
    amount: Amount,
) -> LedgerResult<()> {
    const OP: &str = "set_vesting_schedule";
    require_admin(s, caller, OP)?;
    require(duration_blocks > 0, OP, LedgerError::InvalidDuration)?;
    require(amount > 0, OP, LedgerError::InvalidAmount)?;

    s.vesting_schedules.insert(
        recipient.clone(),
        VestingSchedule {
            start_block,
            duration_blocks,
            total_amount: amount,
            claimed_amount: 0,
        },
    );
    record(
        s,
        LedgerEvent::VestingScheduled {
            recipient: recipient.clone(),
            start_block,
            duration_blocks,
            amount,
        },
    );
    Ok(())
}

/// Pay out everything vested and not yet claimed, from the admin balance.
/// Returns the amount paid.
pub fn claim_vesting(s: &mut Ledger, caller: &AccountId) -> LedgerResult<Amount> {
    const OP: &str = "claim_vesting";
    let schedule = s
        .vesting_schedules
        .get(caller)
        .ok_or_else(|| rejected(OP, LedgerError::VestingNotFound))?;

    let claimable = positive_amount(schedule.claimable_at(s.block_height))
        .ok_or_else(|| rejected(OP, LedgerError::VestingLocked))?;
    let claimed_after = credit(schedule.claimed_amount, claimable).map_err(|e| rejected(OP, e))?;

    let admin = s.admin.clone();
    let admin_after = debit(s.balance_of(&admin), claimable).map_err(|e| rejected(OP, e))?;
    // Claiming to the admin itself nets out to no balance change
    let caller_after = if *caller == admin {
        s.balance_of(caller)
    } else {
        credit(s.balance_of(caller), claimable).map_err(|e| rejected(OP, e))?
    };

    if *caller != admin {
        s.balances.insert(admin, admin_after);
    }
    s.balances.insert(caller.clone(), caller_after);
    if let Some(schedule) = s.vesting_schedules.get_mut(caller) {
        schedule.claimed_amount = claimed_after;
    }
    record(
        s,
        LedgerEvent::VestingClaimed {
            account: caller.clone(),
            amount: claimable,
            claimed_total: claimed_after,
        },
    );
    Ok(claimable)
}

/// Record a delegation. Presence of any record, expired or not, blocks a new one.
pub fn delegate(
    s: &mut Ledger,
    caller: &AccountId,
    delegatee: &AccountId,
    until_block: BlockHeight,
) -> LedgerResult<()> {
    const OP: &str = "delegate";
    require(until_block > s.block_height, OP, LedgerError::InvalidExpiry)?;
    require(
        !s.delegations.contains_key(caller),
        OP,
        LedgerError::DelegationActive,
    )?;

    s.delegations.insert(
        caller.clone(),
        Delegation {
            delegatee: delegatee.clone(),
            until_block,
        },
    );
    record(
        s,
        LedgerEvent::Delegated {
            delegator: caller.clone(),
            delegatee: delegatee.clone(),
            until_block,
        },
    );
    Ok(())
}

pub fn revoke_delegation(s: &mut Ledger, caller: &AccountId) -> LedgerResult<()> {
    const OP: &str = "revoke_delegation";
    s.delegations
        .remove(caller)
        .ok_or_else(|| rejected(OP, LedgerError::DelegationNotFound))?;
    record(
        s,
        LedgerEvent::DelegationRevoked {
            delegator: caller.clone(),
        },
    );
    Ok(())
}
