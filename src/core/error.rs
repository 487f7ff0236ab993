//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`SlopError`] which covers every failure a run of slop can hit,
//! from malformed flag values to a misbehaving selection engine. It uses `thiserror`
//! for ergonomic error definitions and includes constructors for common failure scenarios.
//!
//! # Public API
//! - [`SlopError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, SlopError>`
//!
//! # Error Categories
//! - **Validation**: Invalid colors, out-of-range levels, stray arguments
//! - **Format templates**: Incomplete or unknown `%` specifiers
//! - **Selection engine**: Missing binary, failed process, unreadable result
//! - **Configuration**: Unreadable or malformed config file

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Domain-specific error types for slop
#[derive(Error, Debug)]
pub enum SlopError {
    // Option validation errors
    #[error("Unable to parse value `{input}` as a color. Should be in the format r,g,b or r,g,b,a. Like 1,1,1,1.")]
    InvalidColor { input: String },

    #[error("--nodecorations must be between 0 and 2. Or be used as a flag. (got {value})")]
    InvalidRange { value: i32 },

    #[error("Unexpected positional argument: {argument}")]
    UnexpectedArgument { argument: String },

    #[error("{message}")]
    InvalidArguments { message: String },

    // Format template errors
    #[error("Expected character after `%`, got END.")]
    IncompleteSpecifier,

    #[error("Expected x, y, w, h, g, i, c, or % after % in format. Got `{specifier}`.")]
    UnknownSpecifier { specifier: char },

    // Selection engine errors
    #[error("Selection engine `{command}` was not found. Set SLOP_ENGINE or configure one in {config_hint}")]
    EngineNotFound {
        command: String,
        config_hint: String,
    },

    #[error("Failed to start selection engine `{command}`: {source}")]
    EngineSpawnFailed {
        command: String,
        source: std::io::Error,
    },

    #[error("Selection engine `{command}` failed with {status}")]
    EngineFailed { command: String, status: ExitStatus },

    #[error("Selection engine `{command}` returned an unreadable selection: {source}")]
    EngineOutput {
        command: String,
        source: serde_json::Error,
    },

    // Configuration errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using SlopError
pub type Result<T> = std::result::Result<T, SlopError>;

impl SlopError {
    /// Create an invalid color error carrying the untouched input
    pub fn invalid_color(input: impl Into<String>) -> Self {
        Self::InvalidColor {
            input: input.into(),
        }
    }

    /// Create an unexpected positional argument error
    pub fn unexpected_argument(argument: impl Into<String>) -> Self {
        Self::UnexpectedArgument {
            argument: argument.into(),
        }
    }

    /// Create an invalid arguments error from a tokenizer message
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            message: message.into(),
        }
    }

    /// Create an engine spawn failure, mapping a missing binary to [`SlopError::EngineNotFound`]
    pub fn engine_spawn_failed(
        command: impl Into<String>,
        config_hint: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        let command = command.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::EngineNotFound {
                command,
                config_hint: config_hint.into(),
            }
        } else {
            Self::EngineSpawnFailed { command, source }
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }
}
