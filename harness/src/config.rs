//! Harness configuration

use anyhow::{Context, Result};
use fix_ledger::Genesis;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Scenario file to run when none is given on the command line
    pub scenario_path: String,

    /// Check ledger invariants after every step
    #[serde(default = "default_check_invariants")]
    pub check_invariants: bool,

    /// Abort the run at the first failed expectation
    #[serde(default)]
    pub stop_on_failure: bool,

    /// Initial admin, minters and block height
    #[serde(default)]
    pub genesis: Genesis,
}

fn default_check_invariants() -> bool {
    true
}

impl HarnessConfig {
    /// Load configuration from TOML file
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("HARNESS_CONFIG")
            .unwrap_or_else(|_| "harness-config.toml".to_string());

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &str) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path))?;

        let config: HarnessConfig =
            toml::from_str(&config_str).context("Failed to parse config TOML")?;

        Ok(config)
    }

    /// Create default configuration
    pub fn default_local() -> Self {
        Self {
            scenario_path: "harness/scenarios/fix_token.toml".to_string(),
            check_invariants: true,
            stop_on_failure: false,
            genesis: Genesis::default(),
        }
    }

    /// Write default config to file
    pub fn write_default(path: &str) -> Result<()> {
        let config = Self::default_local();
        let toml_str = toml::to_string_pretty(&config).context("Failed to serialize config")?;

        std::fs::write(path, toml_str).context(format!("Failed to write config to {}", path))?;

        log::info!("Created default config at {}", path);
        Ok(())
    }
}
