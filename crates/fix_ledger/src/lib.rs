//! FixToken ledger: a deterministic in-memory fungible-token state machine
//! All transitions validate first and mutate last, no unwrap/panic

pub mod error;
pub mod state;
pub mod math;
pub mod vesting;
pub mod events;
pub mod helpers;
pub mod transitions;
pub mod tx;

// Re-export commonly used types
pub use error::*;
pub use state::*;
pub use events::*;
pub use helpers::*;
pub use transitions::*;
pub use tx::*;
