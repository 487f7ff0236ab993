//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the fatal error header
pub fn has_error_header() -> impl Predicate<str> {
    predicates::str::contains("Slop encountered an error:")
}

/// Creates a predicate that checks for the cancellation notice
pub fn cancelled_notice() -> impl Predicate<str> {
    predicates::str::contains("Selection was cancelled")
}

/// Creates a predicate that checks for an invalid color message citing `input`
pub fn invalid_color(input: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Unable to parse value `{input}` as a color"))
}
