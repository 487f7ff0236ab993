//! Which selection engine to run, and where that choice comes from.
//!
//! Resolution order: the `SLOP_ENGINE` environment variable, then the `engine`
//! entry of `config.json` in the slop config directory, then the built-in
//! `slop-engine` command.

use crate::core::dirs::get_config_file;
use crate::core::error::{Result, SlopError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENGINE_ENV_VAR: &str = "SLOP_ENGINE";
pub const DEFAULT_ENGINE: &str = "slop-engine";

/// A program plus its arguments
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EngineCommand {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for EngineCommand {
    fn default() -> Self {
        Self {
            command: DEFAULT_ENGINE.to_string(),
            args: Vec::new(),
        }
    }
}

impl EngineCommand {
    /// Parse an environment override: whitespace-separated program and arguments.
    /// Blank values are ignored.
    pub fn from_env_value(value: &str) -> Option<Self> {
        let mut parts = value.split_whitespace().map(str::to_string);
        let command = parts.next()?;
        Some(Self {
            command,
            args: parts.collect(),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct SlopConfig {
    #[serde(default)]
    pub engine: Option<EngineCommand>,
}

impl SlopConfig {
    /// Load the config file from the standard location
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_file()?)
    }

    /// Load a config file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| SlopError::config_read_failed(path, e))?;
        let config =
            serde_json::from_str(&content).map_err(|e| SlopError::config_parse_failed(path, e))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn resolve_engine(&self, env_override: Option<&str>) -> EngineCommand {
        if let Some(engine) = env_override.and_then(EngineCommand::from_env_value) {
            log::debug!("Using engine from {ENGINE_ENV_VAR}: {}", engine.command);
            return engine;
        }
        self.engine.clone().unwrap_or_default()
    }
}
