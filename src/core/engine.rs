//! Process-backed [`SelectionProvider`].
//!
//! The engine is an external program that performs the interactive selection.
//! It receives the [`SelectOptions`] as JSON on stdin and answers with one JSON
//! [`Selection`] on stdout, for example
//! `{"x":10,"y":20,"w":100,"h":50,"id":0,"cancelled":false}`.
//! A non-zero exit status is treated as a failure, not a cancellation.

use crate::core::{
    config::{EngineCommand, SlopConfig, ENGINE_ENV_VAR},
    dirs::get_config_file,
    error::{Result, SlopError},
    options::SelectOptions,
    selection::{Selection, SelectionProvider},
};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

pub struct EngineProvider {
    engine: Option<EngineCommand>,
}

impl EngineProvider {
    /// Use a fixed engine command
    pub fn new(engine: EngineCommand) -> Self {
        Self {
            engine: Some(engine),
        }
    }

    /// Resolve the engine from the environment and config file when first needed
    pub fn from_environment() -> Self {
        Self { engine: None }
    }

    fn resolve(&self) -> Result<EngineCommand> {
        if let Some(engine) = &self.engine {
            return Ok(engine.clone());
        }
        // The config file is only read when the environment has no override
        let env_override = std::env::var(ENGINE_ENV_VAR).ok();
        if let Some(engine) = env_override.as_deref().and_then(EngineCommand::from_env_value) {
            log::debug!("Using engine from {ENGINE_ENV_VAR}: {}", engine.command);
            return Ok(engine);
        }
        Ok(SlopConfig::load()?.resolve_engine(None))
    }
}

impl SelectionProvider for EngineProvider {
    fn select(&mut self, options: SelectOptions) -> Result<Selection> {
        let engine = self.resolve()?;
        let payload = serde_json::to_vec(&options)?;

        log::debug!(
            "Starting selection engine: {} {}",
            engine.command,
            engine.args.join(" ")
        );

        let mut child = Command::new(&engine.command)
            .args(&engine.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                let hint = get_config_file()
                    .map(|path| path.display().to_string())
                    .unwrap_or_default();
                SlopError::engine_spawn_failed(&engine.command, hint, e)
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // Engines are free to ignore their options
            if let Err(e) = stdin.write_all(&payload) {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
                log::debug!("Engine closed stdin before reading options");
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(SlopError::EngineFailed {
                command: engine.command,
                status: output.status,
            });
        }

        let selection = parse_selection(&engine.command, &output.stdout)?;
        log::debug!("Engine returned {selection:?}");
        Ok(selection)
    }
}

/// Decode the engine's stdout into a [`Selection`]
pub fn parse_selection(command: &str, stdout: &[u8]) -> Result<Selection> {
    serde_json::from_slice(stdout).map_err(|source| SlopError::EngineOutput {
        command: command.to_string(),
        source,
    })
}
