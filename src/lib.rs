//! slop - select a screen region and print it using a format template.
//!
//! This library holds everything around the interactive selection itself: turning
//! flags into validated options, parsing colors, rendering `%`-specifier templates,
//! and talking to the external engine that performs the selection.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Flag validation and color parsing
//! - Output template rendering
//! - The selection provider seam and its process-backed engine
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    help_text,
    parse_color,
    print_error,
    render,
    split_on_delimiter,

    EngineCommand,
    EngineProvider,
    Result,
    Rgba,

    SelectArgs,
    SelectOptions,
    Selection,
    SelectionProvider,
    SlopConfig,
    // Error handling
    SlopError,

    DEFAULT_FORMAT,
};
