//! Core functionality for slop.
//!
//! This module provides the building blocks behind the command line: flag
//! validation, color parsing, output templates, and the selection engine seam.

pub mod color;
pub mod config;
pub mod dirs;
pub mod engine;
pub mod error;
pub mod format;
pub mod help;
pub mod options;
pub mod output;
pub mod selection;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{Result, SlopError};

// === Option validation ===
// Raw flags and the validated options built from them
pub use color::{parse_color, Rgba};
pub use options::{split_on_delimiter, SelectArgs, SelectOptions};

// === Output templates ===
// `%`-specifier rendering of a selection
pub use format::{render, DEFAULT_FORMAT};

// === Selection ===
// The result type, the provider trait, and the process-backed engine
pub use engine::EngineProvider;
pub use selection::{Selection, SelectionProvider};

// === Engine configuration ===
pub use config::{EngineCommand, SlopConfig};

// === Output formatting ===
pub use help::help_text;
pub use output::print_error;
