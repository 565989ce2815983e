//! Ledger rejection taxonomy
//!
//! Variants are named by what went wrong. Several meanings share one legacy
//! numeric code; `code()` is the only place that mapping lives.

use thiserror::Error;

pub const ERR_UNAUTHORIZED: u32 = 100;
pub const ERR_PAUSED: u32 = 101;
pub const ERR_INVALID_AMOUNT: u32 = 102;
pub const ERR_INVALID_RECIPIENT: u32 = 103;
pub const ERR_INVALID_MINTER: u32 = 104;
pub const ERR_ALREADY_REGISTERED: u32 = 105;
pub const ERR_VESTING_NOT_FOUND: u32 = 106;
pub const ERR_VESTING_LOCKED: u32 = 107;
pub const ERR_DELEGATION_ACTIVE: u32 = 108;
pub const ERR_MAX_SUPPLY_REACHED: u32 = 109;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("caller is not authorized for this operation")]
    Unauthorized,

    #[error("ledger is paused")]
    Paused,

    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("insufficient balance")]
    InsufficientBalance,

    #[error("metadata exceeds maximum length")]
    MetadataTooLong,

    #[error("arithmetic overflow")]
    ArithmeticOverflow,

    #[error("vesting duration must be greater than zero")]
    InvalidDuration,

    #[error("delegation expiry must be after the current block")]
    InvalidExpiry,

    #[error("recipient must differ from sender")]
    InvalidRecipient,

    #[error("caller is not an authorized minter")]
    InvalidMinter,

    #[error("minter already registered")]
    AlreadyRegistered,

    #[error("no vesting schedule for account")]
    VestingNotFound,

    #[error("no delegation for account")]
    DelegationNotFound,

    #[error("nothing vested to claim")]
    VestingLocked,

    #[error("delegation already active")]
    DelegationActive,

    #[error("mint would exceed maximum supply")]
    MaxSupplyReached,
}

impl LedgerError {
    /// Stable numeric code exposed at the call boundary
    pub fn code(&self) -> u32 {
        match self {
            LedgerError::Unauthorized => ERR_UNAUTHORIZED,
            LedgerError::Paused => ERR_PAUSED,
            LedgerError::InvalidAmount
            | LedgerError::InsufficientBalance
            | LedgerError::MetadataTooLong
            | LedgerError::ArithmeticOverflow
            | LedgerError::InvalidDuration
            | LedgerError::InvalidExpiry => ERR_INVALID_AMOUNT,
            LedgerError::InvalidRecipient => ERR_INVALID_RECIPIENT,
            LedgerError::InvalidMinter => ERR_INVALID_MINTER,
            LedgerError::AlreadyRegistered => ERR_ALREADY_REGISTERED,
            LedgerError::VestingNotFound | LedgerError::DelegationNotFound => {
                ERR_VESTING_NOT_FOUND
            }
            LedgerError::VestingLocked => ERR_VESTING_LOCKED,
            LedgerError::DelegationActive => ERR_DELEGATION_ACTIVE,
            LedgerError::MaxSupplyReached => ERR_MAX_SUPPLY_REACHED,
        }
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;
