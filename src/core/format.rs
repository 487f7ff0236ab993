//! Rendering of `%`-escaped output templates.
//!
//! A template is literal text mixed with two-character specifiers. Rendering is a
//! single left-to-right pass and a pure function of the template and the selection.
//!
//! | Specifier | Output |
//! |-----------|--------|
//! | `%x` `%y` `%w` `%h` | Rounded geometry component |
//! | `%g` | `{w}x{h}+{x}+{y}` |
//! | `%i` | Window id |
//! | `%c` | `1` if cancelled, else `0` |
//! | `%%` | A literal `%` |
//!
//! Letters are case-insensitive. Geometry is rounded half away from zero.

use crate::core::{
    error::{Result, SlopError},
    selection::Selection,
};

/// Template used when no `--format` is given
pub const DEFAULT_FORMAT: &str = "%g\n";

/// Render `template` against `selection`
///
/// # Errors
/// - [`SlopError::IncompleteSpecifier`] if the template ends in a lone `%`
/// - [`SlopError::UnknownSpecifier`] if `%` is followed by an unsupported character
///
/// # Examples
/// ```
/// use slop::core::{format::render, selection::Selection};
///
/// let selection = Selection::new(10.4, 20.6, 100.0, 50.0, 7);
/// assert_eq!(render("%g %i %c", &selection)?, "100x50+10+21 7 0");
/// # Ok::<(), slop::SlopError>(())
/// ```
pub fn render(template: &str, selection: &Selection) -> Result<String> {
    let mut output = String::with_capacity(template.len() + 32);
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            output.push(ch);
            continue;
        }

        let specifier = chars.next().ok_or(SlopError::IncompleteSpecifier)?;
        match specifier.to_ascii_lowercase() {
            'x' => output.push_str(&rounded(selection.x).to_string()),
            'y' => output.push_str(&rounded(selection.y).to_string()),
            'w' => output.push_str(&rounded(selection.w).to_string()),
            'h' => output.push_str(&rounded(selection.h).to_string()),
            'g' => output.push_str(&geometry(selection)),
            'i' => output.push_str(&selection.id.to_string()),
            'c' => output.push(if selection.cancelled { '1' } else { '0' }),
            '%' => output.push('%'),
            _ => return Err(SlopError::UnknownSpecifier { specifier }),
        }
    }

    Ok(output)
}

/// Check a template without a real selection
///
/// Renders against an all-zero selection and discards the text, so template
/// mistakes surface before the user is asked to select anything.
pub fn validate(template: &str) -> Result<()> {
    render(template, &Selection::default()).map(|_| ())
}

fn rounded(value: f32) -> i64 {
    value.round() as i64
}

fn geometry(selection: &Selection) -> String {
    format!(
        "{}x{}+{}+{}",
        rounded(selection.w),
        rounded(selection.h),
        rounded(selection.x),
        rounded(selection.y)
    )
}
