//! FixToken Scenario Harness
//!
//! Drives an in-memory FixToken ledger through a scripted scenario: advances
//! the block clock, applies transactions on behalf of trusted callers, and
//! checks each response and the ledger invariants along the way.

mod config;
mod runner;
mod scenario;

use anyhow::{bail, Context, Result};
use config::HarnessConfig;
use runner::Runner;
use scenario::Scenario;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let first = args.next();

    if first.as_deref() == Some("--init") {
        let path = args
            .next()
            .unwrap_or_else(|| "harness-config.toml".to_string());
        return HarnessConfig::write_default(&path);
    }

    log::info!("Starting FixToken harness");

    // Load configuration
    let config = HarnessConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({:#}), using default local config", e);
        HarnessConfig::default_local()
    });

    let scenario_path = first.unwrap_or_else(|| config.scenario_path.clone());
    let scenario = Scenario::load(&scenario_path)
        .context(format!("Cannot run scenario {}", scenario_path))?;

    log::info!(
        "Genesis: admin {}, {} minter(s), block {}",
        config.genesis.admin,
        config.genesis.minters.len(),
        config.genesis.start_block
    );

    let mut runner = Runner::new(
        config.genesis.clone(),
        config.check_invariants,
        config.stop_on_failure,
    );
    let report = runner.run(&scenario);

    let ledger = runner.ledger();
    log::info!(
        "Finished at block {}: supply {}, {} mint(s), {} event(s)",
        ledger.block_height(),
        ledger.total_supply(),
        ledger.mint_counter(),
        ledger.events().len()
    );

    if !report.passed() {
        for failure in &report.failures {
            log::error!("{}", failure);
        }
        bail!(
            "{} failure(s) across {} step(s)",
            report.failures.len(),
            report.steps_run
        );
    }

    log::info!("All {} step(s) passed", report.steps_run);
    Ok(())
}
