//! Transactions as data
//!
//! `Tx` mirrors the transition functions one-to-one so that a caller can
//! describe a transaction (e.g. from a scenario file) and apply it uniformly.

use serde::{Deserialize, Serialize};

use crate::error::LedgerResult;
use crate::state::*;
use crate::transitions::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Tx {
    Transfer {
        amount: Amount,
        sender: AccountId,
        recipient: AccountId,
    },
    Mint {
        amount: Amount,
        recipient: AccountId,
        #[serde(default)]
        metadata: String,
    },
    Burn {
        amount: Amount,
    },
    AddMinter {
        target: AccountId,
    },
    RemoveMinter {
        target: AccountId,
    },
    Pause,
    Unpause,
    SetAdmin {
        new_admin: AccountId,
    },
    SetVestingSchedule {
        recipient: AccountId,
        start_block: BlockHeight,
        duration_blocks: BlockHeight,
        amount: Amount,
    },
    ClaimVesting,
    Delegate {
        delegatee: AccountId,
        until_block: BlockHeight,
    },
    RevokeDelegation,
}

impl Tx {
    pub fn name(&self) -> &'static str {
        match self {
            Tx::Transfer { .. } => "transfer",
            Tx::Mint { .. } => "mint",
            Tx::Burn { .. } => "burn",
            Tx::AddMinter { .. } => "add_minter",
            Tx::RemoveMinter { .. } => "remove_minter",
            Tx::Pause => "pause",
            Tx::Unpause => "unpause",
            Tx::SetAdmin { .. } => "set_admin",
            Tx::SetVestingSchedule { .. } => "set_vesting_schedule",
            Tx::ClaimVesting => "claim_vesting",
            Tx::Delegate { .. } => "delegate",
            Tx::RevokeDelegation => "revoke_delegation",
        }
    }
}

/// Success value of an applied transaction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxOutput {
    /// Plain acknowledgement (`true` at the call boundary)
    Ack,
    /// Amount paid out by a vesting claim
    Claimed(Amount),
}

/// Apply `tx` on behalf of `caller`
pub fn apply(s: &mut Ledger, caller: &AccountId, tx: &Tx) -> LedgerResult<TxOutput> {
    let ack = |r: LedgerResult<()>| r.map(|()| TxOutput::Ack);
    match tx {
        Tx::Transfer {
            amount,
            sender,
            recipient,
        } => ack(transfer(s, caller, *amount, sender, recipient)),
        Tx::Mint {
            amount,
            recipient,
            metadata,
        } => mint(s, caller, *amount, recipient, metadata).map(|_| TxOutput::Ack),
        Tx::Burn { amount } => ack(burn(s, caller, *amount)),
        Tx::AddMinter { target } => ack(add_minter(s, caller, target)),
        Tx::RemoveMinter { target } => ack(remove_minter(s, caller, target)),
        Tx::Pause => ack(pause(s, caller)),
        Tx::Unpause => ack(unpause(s, caller)),
        Tx::SetAdmin { new_admin } => ack(set_admin(s, caller, new_admin)),
        Tx::SetVestingSchedule {
            recipient,
            start_block,
            duration_blocks,
            amount,
        } => ack(set_vesting_schedule(
            s,
            caller,
            recipient,
            *start_block,
            *duration_blocks,
            *amount,
        )),
        Tx::ClaimVesting => claim_vesting(s, caller).map(TxOutput::Claimed),
        Tx::Delegate {
            delegatee,
            until_block,
        } => ack(delegate(s, caller, delegatee, *until_block)),
        Tx::RevokeDelegation => ack(revoke_delegation(s, caller)),
    }
}
