//! Append-only journal of applied transactions

use serde::{Deserialize, Serialize};

use crate::state::{AccountId, Amount, BlockHeight, MintId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LedgerEvent {
    Transfer {
        from: AccountId,
        to: AccountId,
        amount: Amount,
    },
    Mint {
        id: MintId,
        recipient: AccountId,
        amount: Amount,
    },
    Burn {
        account: AccountId,
        amount: Amount,
    },
    MinterAdded {
        minter: AccountId,
    },
    MinterRemoved {
        minter: AccountId,
    },
    Paused,
    Unpaused,
    AdminChanged {
        previous: AccountId,
        admin: AccountId,
    },
    VestingScheduled {
        recipient: AccountId,
        start_block: BlockHeight,
        duration_blocks: BlockHeight,
        amount: Amount,
    },
    VestingClaimed {
        account: AccountId,
        amount: Amount,
        claimed_total: Amount,
    },
    Delegated {
        delegator: AccountId,
        delegatee: AccountId,
        until_block: BlockHeight,
    },
    DelegationRevoked {
        delegator: AccountId,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub block_height: BlockHeight,
    pub event: LedgerEvent,
}
