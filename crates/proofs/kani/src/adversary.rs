//! Adversarial step generator
//!
//! A step is decoded from a handful of raw bytes so that the same decoding
//! serves Kani (symbolic bytes) and ordinary tests (fixed bytes).

use arrayvec::ArrayVec;
use fix_ledger::*;

pub const N_ACCOUNTS: usize = 3;
pub const MAX_STEPS: usize = 4;
pub const ACCOUNT_NAMES: [&str; N_ACCOUNTS] = ["deployer", "alice", "bob"];

/// Small amounts keep the state space tractable; `big` selects the cap
const MAX_SMALL_AMOUNT: u8 = 16;
const MAX_ADVANCE: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Transfer,
    Mint,
    Burn,
    AddMinter,
    RemoveMinter,
    Pause,
    Unpause,
    SetAdmin,
    SetVesting,
    Claim,
    Delegate,
    Revoke,
    Advance,
}

impl Step {
    pub fn from_choice(choice: u8) -> Step {
        match choice % 13 {
            0 => Step::Transfer,
            1 => Step::Mint,
            2 => Step::Burn,
            3 => Step::AddMinter,
            4 => Step::RemoveMinter,
            5 => Step::Pause,
            6 => Step::Unpause,
            7 => Step::SetAdmin,
            8 => Step::SetVesting,
            9 => Step::Claim,
            10 => Step::Delegate,
            11 => Step::Revoke,
            _ => Step::Advance,
        }
    }
}

/// Raw choices for one step; every field is reduced modulo its bound
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepInput {
    pub step: u8,
    pub caller: u8,
    pub other: u8,
    pub amount: u8,
    pub blocks: u8,
    pub big: bool,
}

#[cfg(kani)]
impl kani::Arbitrary for StepInput {
    fn any() -> Self {
        Self {
            step: kani::any(),
            caller: kani::any(),
            other: kani::any(),
            amount: kani::any(),
            blocks: kani::any(),
            big: kani::any(),
        }
    }
}

pub fn account(choice: u8) -> AccountId {
    AccountId::from(ACCOUNT_NAMES[usize::from(choice) % N_ACCOUNTS])
}

pub fn amount(choice: u8, big: bool) -> Amount {
    if big {
        MAX_SUPPLY
    } else {
        u64::from(choice % MAX_SMALL_AMOUNT)
    }
}

/// Decode an input into a caller and transaction; `None` for a clock advance
pub fn to_tx(input: &StepInput, height: BlockHeight) -> Option<(AccountId, Tx)> {
    let caller = account(input.caller);
    let other = account(input.other);
    let amount = amount(input.amount, input.big);
    let blocks = u64::from(input.blocks % MAX_ADVANCE);

    let tx = match Step::from_choice(input.step) {
        Step::Transfer => Tx::Transfer {
            amount,
            sender: caller.clone(),
            recipient: other,
        },
        Step::Mint => Tx::Mint {
            amount,
            recipient: other,
            metadata: String::new(),
        },
        Step::Burn => Tx::Burn { amount },
        Step::AddMinter => Tx::AddMinter { target: other },
        Step::RemoveMinter => Tx::RemoveMinter { target: other },
        Step::Pause => Tx::Pause,
        Step::Unpause => Tx::Unpause,
        Step::SetAdmin => Tx::SetAdmin { new_admin: other },
        Step::SetVesting => Tx::SetVestingSchedule {
            recipient: other,
            start_block: height,
            duration_blocks: blocks,
            amount,
        },
        Step::Claim => Tx::ClaimVesting,
        Step::Delegate => Tx::Delegate {
            delegatee: other,
            until_block: height.saturating_add(blocks),
        },
        Step::Revoke => Tx::RevokeDelegation,
        Step::Advance => return None,
    };
    Some((caller, tx))
}

/// Apply one decoded step and report which kind it was
pub fn run_step(s: &mut Ledger, input: &StepInput) -> (Step, LedgerResult<TxOutput>) {
    let step = Step::from_choice(input.step);
    match to_tx(input, s.block_height()) {
        Some((caller, tx)) => (step, apply(s, &caller, &tx)),
        None => {
            advance_block(s, u64::from(input.blocks % MAX_ADVANCE));
            (step, Ok(TxOutput::Ack))
        }
    }
}

/// Apply up to `MAX_STEPS` inputs, returning the trace of step kinds
pub fn run_sequence(s: &mut Ledger, inputs: &[StepInput]) -> ArrayVec<Step, MAX_STEPS> {
    let mut trace = ArrayVec::new();
    for input in inputs.iter().take(MAX_STEPS) {
        let (step, _) = run_step(s, input);
        trace.push(step);
    }
    trace
}

#[cfg(kani)]
pub fn adversary_step(s: &mut Ledger) -> Step {
    let input: StepInput = kani::any();
    run_step(s, &input).0
}
