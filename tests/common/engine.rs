//! Scripted fake selection engine
//!
//! Each [`FakeEngine`] lives in its own temporary directory. Its script saves
//! the options it receives on stdin, then prints a canned answer. The same
//! directory doubles as `XDG_CONFIG_HOME` so a user's real config never leaks
//! into a test.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub struct FakeEngine {
    pub temp_dir: TempDir,
    pub script: PathBuf,
    pub options_file: PathBuf,
}

impl FakeEngine {
    /// An engine that answers with `selection_json` and exits 0
    pub fn returning(selection_json: &str) -> anyhow::Result<Self> {
        Self::with_body(&format!("printf '%s\\n' '{selection_json}'"))
    }

    /// An engine that reports a cancelled selection
    pub fn cancelling() -> anyhow::Result<Self> {
        Self::returning(r#"{"x":0,"y":0,"w":0,"h":0,"id":0,"cancelled":true}"#)
    }

    /// An engine that exits with `code` and prints nothing
    pub fn failing(code: i32) -> anyhow::Result<Self> {
        Self::with_body(&format!("exit {code}"))
    }

    fn with_body(body: &str) -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;
        let script = temp_dir.path().join("engine.sh");
        let options_file = temp_dir.path().join("options.json");

        let content = format!(
            "#!/bin/sh\ncat > '{}'\n{body}\n",
            options_file.display()
        );
        fs::write(&script, content)?;

        Ok(Self {
            temp_dir,
            script,
            options_file,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Value for `SLOP_ENGINE` that runs the script through `sh`
    pub fn env_value(&self) -> String {
        format!("sh {}", self.script.display())
    }

    pub fn was_invoked(&self) -> bool {
        self.options_file.exists()
    }

    /// The options JSON the engine received
    pub fn received_options(&self) -> anyhow::Result<serde_json::Value> {
        let content = fs::read_to_string(&self.options_file)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// A `slop` command wired to this engine through `SLOP_ENGINE`
    pub fn command(&self) -> anyhow::Result<Command> {
        let mut cmd = self.bare_command()?;
        cmd.env("SLOP_ENGINE", self.env_value());
        Ok(cmd)
    }

    /// A `slop` command with an isolated config directory and no engine override
    pub fn bare_command(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("slop")?;
        cmd.env_remove("SLOP_ENGINE")
            .env_remove("RUST_LOG")
            .env("XDG_CONFIG_HOME", self.path());
        Ok(cmd)
    }

    /// Write `content` verbatim to `$XDG_CONFIG_HOME/slop/config.json`
    pub fn write_raw_config(&self, content: &str) -> anyhow::Result<()> {
        let dir = self.path().join("slop");
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("config.json"), content)?;
        Ok(())
    }

    /// Point `$XDG_CONFIG_HOME/slop/config.json` at this engine
    pub fn write_config(&self) -> anyhow::Result<()> {
        let config = serde_json::json!({
            "engine": {
                "command": "sh",
                "args": [self.script.display().to_string()],
            }
        });
        self.write_raw_config(&serde_json::to_string_pretty(&config)?)
    }
}
