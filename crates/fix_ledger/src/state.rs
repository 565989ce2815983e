//! Ledger state and read-only queries

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::events::JournalEntry;
use crate::vesting;

pub type Amount = u64;
pub type BlockHeight = u64;
pub type MintId = u64;

pub const TOKEN_NAME: &str = "FixToken";
pub const TOKEN_SYMBOL: &str = "FIX";
pub const TOKEN_DECIMALS: u8 = 6;

/// Hard cap on `total_minted` (1e15 base units)
pub const MAX_SUPPLY: Amount = 1_000_000_000_000_000;

/// Mint metadata limit, counted in UTF-16 code units
pub const MAX_METADATA_LEN: usize = 256;

/// Opaque participant identifier, trusted as supplied by the caller
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintRecord {
    pub amount: Amount,
    pub recipient: AccountId,
    pub metadata: String,
    /// Block height at creation
    pub timestamp: BlockHeight,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingSchedule {
    pub start_block: BlockHeight,
    pub duration_blocks: BlockHeight,
    pub total_amount: Amount,
    pub claimed_amount: Amount,
}

impl VestingSchedule {
    /// Linear unlock at `height`, floor division, capped at `total_amount`.
    /// Negative before `start_block`.
    pub fn vested_at(&self, height: BlockHeight) -> i128 {
        vesting::vested_to_date(self, height)
    }

    pub fn claimable_at(&self, height: BlockHeight) -> i128 {
        vesting::claimable(self, height)
    }

    /// Uncapped projection of unclaimed tokens; keeps growing past the end
    pub fn projected_at(&self, height: BlockHeight) -> i128 {
        vesting::projected_unclaimed(self, height)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegation {
    pub delegatee: AccountId,
    pub until_block: BlockHeight,
}

impl Delegation {
    /// Expiry is informational only: an expired record still counts as active
    /// until it is revoked.
    pub fn is_expired_at(&self, height: BlockHeight) -> bool {
        height >= self.until_block
    }
}

/// Initial authority and clock for a new ledger
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genesis {
    pub admin: AccountId,
    #[serde(default)]
    pub minters: Vec<AccountId>,
    #[serde(default)]
    pub start_block: BlockHeight,
}

impl Default for Genesis {
    fn default() -> Self {
        let deployer = AccountId::new("deployer");
        Self {
            admin: deployer.clone(),
            minters: vec![deployer],
            start_block: 100,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ledger {
    pub(crate) balances: BTreeMap<AccountId, Amount>,
    pub(crate) minters: BTreeMap<AccountId, bool>,
    pub(crate) mint_records: BTreeMap<MintId, MintRecord>,
    pub(crate) vesting_schedules: BTreeMap<AccountId, VestingSchedule>,
    pub(crate) delegations: BTreeMap<AccountId, Delegation>,
    pub(crate) total_minted: Amount,
    pub(crate) paused: bool,
    pub(crate) admin: AccountId,
    pub(crate) mint_counter: MintId,
    pub(crate) block_height: BlockHeight,
    /// Append-only and unbounded; nothing prunes it
    pub(crate) journal: Vec<JournalEntry>,
}

impl Ledger {
    pub fn new(genesis: Genesis) -> Self {
        let minters = genesis.minters.into_iter().map(|m| (m, true)).collect();
        Self {
            balances: BTreeMap::new(),
            minters,
            mint_records: BTreeMap::new(),
            vesting_schedules: BTreeMap::new(),
            delegations: BTreeMap::new(),
            total_minted: 0,
            paused: false,
            admin: genesis.admin,
            mint_counter: 0,
            block_height: genesis.start_block,
            journal: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        TOKEN_NAME
    }

    pub fn symbol(&self) -> &'static str {
        TOKEN_SYMBOL
    }

    pub fn decimals(&self) -> u8 {
        TOKEN_DECIMALS
    }

    pub fn total_supply(&self) -> Amount {
        self.total_minted
    }

    pub fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub fn mint_record(&self, id: MintId) -> Option<&MintRecord> {
        self.mint_records.get(&id)
    }

    pub fn is_minter(&self, account: &AccountId) -> bool {
        self.minters.get(account).copied().unwrap_or(false)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn vesting_schedule_of(&self, account: &AccountId) -> Option<&VestingSchedule> {
        self.vesting_schedules.get(account)
    }

    pub fn delegation_of(&self, account: &AccountId) -> Option<&Delegation> {
        self.delegations.get(account)
    }

    /// Balance plus the uncapped linear projection minus claimed, at the current
    /// height. Can be below the stored balance (or negative) before a schedule
    /// starts, and keeps growing after it ends.
    pub fn effective_balance(&self, account: &AccountId) -> i128 {
        let base = i128::from(self.balance_of(account));
        match self.vesting_schedules.get(account) {
            Some(schedule) => base.saturating_add(schedule.projected_at(self.block_height)),
            None => base,
        }
    }

    pub fn admin(&self) -> &AccountId {
        &self.admin
    }

    pub fn block_height(&self) -> BlockHeight {
        self.block_height
    }

    pub fn mint_counter(&self) -> MintId {
        self.mint_counter
    }

    pub fn events(&self) -> &[JournalEntry] {
        &self.journal
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(Genesis::default())
    }
}
