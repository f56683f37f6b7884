//! Demo configuration gathered from the process environment.
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use battle_content::{ConfigLoader, Scenario, ScenarioLoader};
use battle_runtime::RuntimeConfig;

/// Everything the demo needs to assemble a runtime and replay a script.
#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub runtime: RuntimeConfig,
    pub scenario: Scenario,
}

impl DemoConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_CONFIG` - TOML battle config path (default: built-in)
    /// - `BATTLE_SCENARIO` - RON scenario path (default: built-in duel)
    /// - plus the runtime variables read by [`RuntimeConfig::from_env`]
    pub fn from_env() -> Result<Self> {
        let mut runtime = RuntimeConfig::from_env();

        if let Some(path) = read_path("BATTLE_CONFIG") {
            runtime.battle = ConfigLoader::load(&path)?;
        }

        let scenario = match read_path("BATTLE_SCENARIO") {
            Some(path) => ScenarioLoader::load(&path)?,
            None => Scenario::duel(),
        };

        Ok(Self { runtime, scenario })
    }
}

fn read_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
