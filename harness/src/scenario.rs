//! Scenario files: clock advances, transactions and queries with expectations

use anyhow::{Context, Result};
use fix_ledger::{AccountId, BlockHeight, MintId, Tx};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn load(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .context(format!("Failed to read scenario file: {}", path))?;
        Self::parse(&text).context(format!("Failed to parse scenario: {}", path))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Move the clock forward
    Advance { blocks: BlockHeight },
    Tx {
        caller: AccountId,
        tx: Tx,
        #[serde(default)]
        expect: Option<Response>,
    },
    Query {
        query: Query,
        #[serde(default)]
        expect: Option<Response>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "q", rename_all = "snake_case")]
pub enum Query {
    Name,
    Symbol,
    Decimals,
    TotalSupply,
    BalanceOf { account: AccountId },
    MintRecord { id: MintId },
    IsMinter { account: AccountId },
    IsPaused,
    VestingScheduleOf { account: AccountId },
    DelegationOf { account: AccountId },
    EffectiveBalance { account: AccountId },
    Admin,
    BlockHeight,
    Events,
}

/// Two-branch result at the call boundary: a JSON value on success, the
/// numeric error code on failure. An absent value reads as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub ok: bool,
    #[serde(default)]
    pub value: Value,
}

impl Response {
    pub fn ok(value: Value) -> Self {
        Self { ok: true, value }
    }

    pub fn err(code: u32) -> Self {
        Self {
            ok: false,
            value: Value::from(code),
        }
    }

    /// Objects in the expectation match any superset in the actual value,
    /// everything else must be equal.
    pub fn satisfied_by(&self, actual: &Response) -> bool {
        self.ok == actual.ok && value_contains(&self.value, &actual.value)
    }
}

fn value_contains(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Object(want), Value::Object(have)) => want
            .iter()
            .all(|(k, v)| have.get(k).map_or(false, |h| value_contains(v, h))),
        _ => expected == actual,
    }
}
