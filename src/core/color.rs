//! Parsing of `r,g,b[,a]` color specifications.
//!
//! This module provides [`Rgba`] and [`parse_color`], which turn the value of the
//! `--color` flag into four float channels. Parsing is all-or-nothing: any malformed
//! input yields [`SlopError::InvalidColor`] carrying the input exactly as given.
//!
//! # Accepted Formats
//! - **RGB**: `0.2,0.4,0.6` (alpha defaults to `1`)
//! - **RGBA**: `0.2,0.4,0.6,0.8`
//!
//! Channels are separated by exactly one character, conventionally `,`. Each
//! channel may carry leading whitespace. Channels are not clamped.

use crate::core::error::{Result, SlopError};
use serde::{Deserialize, Serialize};

/// A color with four float channels, nominally in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Rgba {
    /// Opaque mid-gray, the selection rectangle's default color
    fn default() -> Self {
        Self::new(0.5, 0.5, 0.5, 1.0)
    }
}

/// Parse a color specification into an [`Rgba`] value
///
/// # Examples
/// ```
/// use slop::core::color::{parse_color, Rgba};
///
/// assert_eq!(parse_color("1,0,0")?, Rgba::new(1.0, 0.0, 0.0, 1.0));
/// assert_eq!(parse_color("0,0,1,0.5")?, Rgba::new(0.0, 0.0, 1.0, 0.5));
/// assert!(parse_color("1,0").is_err());
/// # Ok::<(), slop::SlopError>(())
/// ```
pub fn parse_color(input: &str) -> Result<Rgba> {
    let channels = parse_channels(input).ok_or_else(|| SlopError::invalid_color(input))?;

    match channels.as_slice() {
        [r, g, b] => Ok(Rgba::new(*r, *g, *b, 1.0)),
        [r, g, b, a] => Ok(Rgba::new(*r, *g, *b, *a)),
        _ => Err(SlopError::invalid_color(input)),
    }
}

/// Read three or four channels, each followed by exactly one separator character.
///
/// Any single character separates channels, so `1 1 1` and `1;1;1` are as valid
/// as `1,1,1`. Returns `None` on an unparseable channel, a missing channel, or
/// anything left over after the fourth channel.
fn parse_channels(input: &str) -> Option<Vec<f32>> {
    let mut rest = input;
    let mut channels = Vec::with_capacity(4);

    loop {
        let (value, consumed) = parse_float_prefix(rest)?;
        channels.push(value);
        rest = &rest[consumed..];

        match channels.len() {
            3 if rest.is_empty() => return Some(channels),
            4 => return rest.is_empty().then_some(channels),
            _ => {}
        }

        let mut chars = rest.chars();
        chars.next()?;
        rest = chars.as_str();
    }
}

/// Parse the longest float at the start of `text`, skipping leading whitespace.
///
/// Returns the value and the number of bytes consumed, whitespace included.
fn parse_float_prefix(text: &str) -> Option<(f32, usize)> {
    let trimmed = text.trim_start();
    let offset = text.len() - trimmed.len();
    let len = float_prefix_len(trimmed);
    if len == 0 {
        return None;
    }
    let value = trimmed[..len].parse::<f32>().ok()?;
    Some((value, offset + len))
}

fn float_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let count_digits = |from: usize| {
        bytes[from.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    for word in ["infinity", "inf", "nan"] {
        let tail = &bytes[end..];
        if tail.len() >= word.len() && tail[..word.len()].eq_ignore_ascii_case(word.as_bytes()) {
            return end + word.len();
        }
    }

    let int_digits = count_digits(end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exp_digits = count_digits(exponent);
        if exp_digits > 0 {
            end = exponent + exp_digits;
        }
    }
    end
}
