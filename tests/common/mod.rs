//! Shared utilities for slop integration tests
//!
//! The binary is driven against a scripted fake selection engine so tests
//! never need a display.

pub mod assertions;
pub mod engine;
