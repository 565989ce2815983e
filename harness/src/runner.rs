//! Scenario execution against an in-memory ledger

use fix_ledger::{
    advance_block, apply, violated_invariants, Genesis, Ledger, LedgerResult, TxOutput,
};
use serde::Serialize;
use serde_json::Value;

use crate::scenario::{Query, Response, Scenario, Step};

/// Outcome of a scenario run
#[derive(Debug, Default)]
pub struct Report {
    pub steps_run: usize,
    pub failures: Vec<String>,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct Runner {
    ledger: Ledger,
    check_invariants: bool,
    stop_on_failure: bool,
}

impl Runner {
    pub fn new(genesis: Genesis, check_invariants: bool, stop_on_failure: bool) -> Self {
        Self {
            ledger: Ledger::new(genesis),
            check_invariants,
            stop_on_failure,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn run(&mut self, scenario: &Scenario) -> Report {
        let mut report = Report::default();
        if let Some(name) = &scenario.name {
            log::info!("Running scenario '{}' ({} steps)", name, scenario.steps.len());
        }

        for (index, step) in scenario.steps.iter().enumerate() {
            let failures_before = report.failures.len();
            self.run_step(index + 1, step, &mut report);
            report.steps_run += 1;

            if self.stop_on_failure && report.failures.len() > failures_before {
                log::warn!("Stopping after step {} (stop_on_failure)", index + 1);
                break;
            }
        }

        report
    }

    fn run_step(&mut self, n: usize, step: &Step, report: &mut Report) {
        match step {
            Step::Advance { blocks } => {
                advance_block(&mut self.ledger, *blocks);
                log::info!(
                    "step {}: advance {} -> block {}",
                    n,
                    blocks,
                    self.ledger.block_height()
                );
            }
            Step::Tx { caller, tx, expect } => {
                let actual = tx_response(apply(&mut self.ledger, caller, tx));
                log::info!(
                    "step {}: {} by {} -> {}",
                    n,
                    tx.name(),
                    caller,
                    render(&actual)
                );
                self.compare(n, tx.name(), expect.as_ref(), &actual, report);

                if self.check_invariants {
                    let violated = violated_invariants(&self.ledger);
                    if !violated.is_empty() {
                        let msg = format!("step {}: invariants violated: {}", n, violated.join(", "));
                        log::error!("{}", msg);
                        report.failures.push(msg);
                    }
                }
            }
            Step::Query { query, expect } => {
                let actual = Response::ok(query_value(&self.ledger, query));
                log::info!("step {}: query {:?} -> {}", n, query, render(&actual));
                self.compare(n, "query", expect.as_ref(), &actual, report);
            }
        }
    }

    fn compare(
        &self,
        n: usize,
        label: &str,
        expect: Option<&Response>,
        actual: &Response,
        report: &mut Report,
    ) {
        let Some(expected) = expect else {
            return;
        };
        if !expected.satisfied_by(actual) {
            let msg = format!(
                "step {} ({}): expected {} but got {}",
                n,
                label,
                render(expected),
                render(actual)
            );
            log::error!("{}", msg);
            report.failures.push(msg);
        }
    }
}

pub fn tx_response(result: LedgerResult<TxOutput>) -> Response {
    match result {
        Ok(TxOutput::Ack) => Response::ok(Value::Bool(true)),
        Ok(TxOutput::Claimed(amount)) => Response::ok(Value::from(amount)),
        Err(err) => Response::err(err.code()),
    }
}

pub fn query_value(s: &Ledger, query: &Query) -> Value {
    match query {
        Query::Name => Value::from(s.name()),
        Query::Symbol => Value::from(s.symbol()),
        Query::Decimals => Value::from(s.decimals()),
        Query::TotalSupply => Value::from(s.total_supply()),
        Query::BalanceOf { account } => Value::from(s.balance_of(account)),
        Query::MintRecord { id } => to_json(&s.mint_record(*id)),
        Query::IsMinter { account } => Value::from(s.is_minter(account)),
        Query::IsPaused => Value::from(s.is_paused()),
        Query::VestingScheduleOf { account } => to_json(&s.vesting_schedule_of(account)),
        Query::DelegationOf { account } => to_json(&s.delegation_of(account)),
        Query::EffectiveBalance { account } => signed_json(s.effective_balance(account)),
        Query::Admin => Value::from(s.admin().as_str()),
        Query::BlockHeight => Value::from(s.block_height()),
        Query::Events => to_json(s.events()),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        log::warn!("Failed to encode query result: {}", e);
        Value::Null
    })
}

/// JSON numbers stop at 64 bits; wider projections fall back to a string
fn signed_json(x: i128) -> Value {
    match i64::try_from(x) {
        Ok(v) => Value::from(v),
        Err(_) => Value::String(x.to_string()),
    }
}

fn render(response: &Response) -> String {
    serde_json::to_string(response).unwrap_or_else(|_| format!("{:?}", response))
}
