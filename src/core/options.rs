//! Command-line flags and the validated selection options built from them.
//!
//! [`SelectArgs`] is the raw, tokenized view of the command line. [`SelectOptions`]
//! is what the selection engine receives: every flag that was present overrides its
//! default, every flag that was absent keeps it.
//!
//! # Validation Rules
//! - `--nodecorations` must lie in `0..=2`; a bare `-n` means `1`
//! - `--color` goes through [`parse_color`] and replaces all four channels
//! - `--shader` is split on `,` with empty segments kept

use crate::core::{
    color::{parse_color, Rgba},
    error::{Result, SlopError},
};
use clap::Parser;
use serde::Serialize;
use std::ffi::OsString;

pub const DEFAULT_SHADER: &str = "textured";
pub const MAX_NODECORATIONS: i32 = 2;

/// Short flags whose value may be attached (`-fVALUE`) or follow as the next argument
const VALUE_SHORTS: &[char] = &['x', 'f', 'b', 'p', 't', 'c', 'r'];
const VALUE_LONGS: &[&str] = &[
    "--xdisplay",
    "--format",
    "--bordersize",
    "--padding",
    "--tolerance",
    "--color",
    "--shader",
];

/// Flags recognized on the command line
///
/// clap's own help and version handling is disabled: `-h` and `-v` are plain
/// switches that the select command acts on.
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "slop")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct SelectArgs {
    /// Print help and exit
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Print version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Sets the X display to use
    #[arg(short = 'x', long = "xdisplay", value_name = "hostname:number.screen_number")]
    pub xdisplay: Option<String>,

    /// Output format template
    #[arg(short = 'f', long = "format", value_name = "STRING", allow_hyphen_values = true)]
    pub format: Option<String>,

    /// Selection rectangle thickness
    #[arg(short = 'b', long = "bordersize", value_name = "FLOAT", allow_negative_numbers = true)]
    pub bordersize: Option<f32>,

    /// Padding around the selection, may be negative
    #[arg(short = 'p', long = "padding", value_name = "FLOAT", allow_negative_numbers = true)]
    pub padding: Option<f32>,

    /// Pixels the mouse may move and still count as a click
    #[arg(short = 't', long = "tolerance", value_name = "FLOAT", allow_negative_numbers = true)]
    pub tolerance: Option<f32>,

    /// Selection color as r,g,b or r,g,b,a
    #[arg(short = 'c', long = "color", value_name = "FLOAT,FLOAT,FLOAT,FLOAT", allow_hyphen_values = true)]
    pub color: Option<String>,

    /// Comma-separated list of shaders
    #[arg(short = 'r', long = "shader", value_name = "STRING")]
    pub shader: Option<String>,

    /// Decoration removal level (0-2), `-n` alone means 1
    #[arg(
        short = 'n',
        long = "nodecorations",
        value_name = "INT",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "1",
        allow_negative_numbers = true
    )]
    pub nodecorations: Option<i32>,

    /// Highlight the selection instead of outlining it
    #[arg(short = 'l', long = "highlight")]
    pub highlight: bool,

    /// Suppress non-essential diagnostics
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Disable cancelling the selection from the keyboard
    #[arg(short = 'k', long = "nokeyboard")]
    pub nokeyboard: bool,

    /// Disable graphics acceleration
    #[arg(short = 'o', long = "noopengl")]
    pub noopengl: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Positional arguments are not accepted; collected only to report them
    #[arg(hide = true)]
    pub positional: Vec<String>,
}

impl SelectArgs {
    /// Tokenize a full command line, program name first
    ///
    /// `--nodecorations` only takes an attached value (`-n2`, `-n=2`,
    /// `--nodecorations=2`); in `-n 2` the `2` is a stray positional.
    pub fn from_command_line<I, T>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(attach_nodecorations_values(argv))
            .map_err(|e| SlopError::invalid_arguments(e.to_string().trim_end()))
    }
}

/// Rewrite `-nX` as `-n=X` so the attached level survives `require_equals`
fn attach_nodecorations_values<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut expect_value = false;
    let mut positional_only = false;

    for arg in argv {
        let arg: OsString = arg.into();
        let rewritten = match arg.to_str() {
            Some(text) if !expect_value && !positional_only => {
                if text == "--" {
                    positional_only = true;
                    None
                } else if text.starts_with("--") {
                    expect_value = VALUE_LONGS.contains(&text);
                    None
                } else if let Some(cluster) = text.strip_prefix('-') {
                    let (rewrite, takes_next) = scan_short_cluster(cluster);
                    expect_value = takes_next;
                    rewrite.map(|cluster| format!("-{cluster}"))
                } else {
                    None
                }
            }
            _ => {
                expect_value = false;
                None
            }
        };
        normalized.push(rewritten.map(OsString::from).unwrap_or(arg));
    }

    normalized
}

/// Returns the rewritten cluster, if any, and whether the next argument is a value
fn scan_short_cluster(cluster: &str) -> (Option<String>, bool) {
    for (index, ch) in cluster.char_indices() {
        let split = index + ch.len_utf8();
        let rest = &cluster[split..];
        if ch == 'n' {
            if rest.is_empty() || rest.starts_with('=') {
                return (None, false);
            }
            return (Some(format!("{}={rest}", &cluster[..split])), false);
        }
        if VALUE_SHORTS.contains(&ch) {
            return (None, rest.is_empty());
        }
    }
    (None, false)
}

/// Validated options handed to the selection engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOptions {
    pub border_size: f32,
    pub padding: f32,
    pub tolerance: f32,
    pub color: Rgba,
    pub nokeyboard: bool,
    pub noopengl: bool,
    pub highlight: bool,
    pub quiet: bool,
    /// Empty means the default display
    pub xdisplay: String,
    pub shaders: Vec<String>,
    pub nodecorations: u8,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            border_size: 1.0,
            padding: 0.0,
            tolerance: 2.0,
            color: Rgba::default(),
            nokeyboard: false,
            noopengl: false,
            highlight: false,
            quiet: false,
            xdisplay: String::new(),
            shaders: vec![DEFAULT_SHADER.to_string()],
            nodecorations: 0,
        }
    }
}

impl SelectOptions {
    /// Build validated options from parsed flags
    ///
    /// Fails on the first invalid value; nothing is partially applied.
    ///
    /// # Examples
    /// ```
    /// use slop::core::options::{SelectArgs, SelectOptions};
    ///
    /// let args = SelectArgs {
    ///     shader: Some("blur,wiggle".to_string()),
    ///     nodecorations: Some(2),
    ///     ..Default::default()
    /// };
    /// let options = SelectOptions::from_args(&args)?;
    /// assert_eq!(options.shaders, vec!["blur", "wiggle"]);
    /// assert_eq!(options.nodecorations, 2);
    /// # Ok::<(), slop::SlopError>(())
    /// ```
    pub fn from_args(args: &SelectArgs) -> Result<Self> {
        let defaults = Self::default();

        let color = match &args.color {
            Some(value) => parse_color(value)?,
            None => defaults.color,
        };

        let nodecorations = match args.nodecorations {
            Some(level) => validate_nodecorations(level)?,
            None => defaults.nodecorations,
        };

        let shaders = args
            .shader
            .as_deref()
            .map(|value| split_on_delimiter(value, ','))
            .unwrap_or(defaults.shaders);

        Ok(Self {
            border_size: args.bordersize.unwrap_or(defaults.border_size),
            padding: args.padding.unwrap_or(defaults.padding),
            tolerance: args.tolerance.unwrap_or(defaults.tolerance),
            color,
            nokeyboard: args.nokeyboard,
            noopengl: args.noopengl,
            highlight: args.highlight,
            quiet: args.quiet,
            xdisplay: args.xdisplay.clone().unwrap_or(defaults.xdisplay),
            shaders,
            nodecorations,
        })
    }
}

fn validate_nodecorations(level: i32) -> Result<u8> {
    if !(0..=MAX_NODECORATIONS).contains(&level) {
        return Err(SlopError::InvalidRange { value: level });
    }
    Ok(level as u8)
}

/// Split `input` on `delimiter`, keeping every segment
///
/// Empty segments survive, so `"a,,b,"` yields `["a", "", "b", ""]` and an
/// empty input yields a single empty segment.
pub fn split_on_delimiter(input: &str, delimiter: char) -> Vec<String> {
    input.split(delimiter).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> SelectArgs {
        let argv = std::iter::once("slop").chain(args.iter().copied());
        SelectArgs::from_command_line(argv).expect("flags should tokenize")
    }

    #[test]
    fn test_defaults_when_no_flags() -> Result<()> {
        let options = SelectOptions::from_args(&SelectArgs::default())?;
        assert_eq!(options, SelectOptions::default());
        assert_eq!(options.border_size, 1.0);
        assert_eq!(options.padding, 0.0);
        assert_eq!(options.tolerance, 2.0);
        assert_eq!(options.color, Rgba::new(0.5, 0.5, 0.5, 1.0));
        assert_eq!(options.shaders, vec!["textured"]);
        assert_eq!(options.nodecorations, 0);
        assert!(options.xdisplay.is_empty());
        Ok(())
    }

    #[test]
    fn test_numeric_flags_override_defaults() -> Result<()> {
        let options = SelectOptions::from_args(&parse(&["-b", "20", "-p", "-5", "-t", "0"]))?;
        assert_eq!(options.border_size, 20.0);
        assert_eq!(options.padding, -5.0);
        assert_eq!(options.tolerance, 0.0);
        Ok(())
    }

    #[test]
    fn test_boolean_flags() -> Result<()> {
        let options = SelectOptions::from_args(&parse(&["-l", "-q", "-k", "-o"]))?;
        assert!(options.highlight);
        assert!(options.quiet);
        assert!(options.nokeyboard);
        assert!(options.noopengl);
        Ok(())
    }

    #[test]
    fn test_color_replaces_all_channels() -> Result<()> {
        let options = SelectOptions::from_args(&parse(&["-c", "0.3,0.4,0.6"]))?;
        assert_eq!(options.color, Rgba::new(0.3, 0.4, 0.6, 1.0));
        Ok(())
    }

    #[test]
    fn test_invalid_color_propagates() {
        let result = SelectOptions::from_args(&parse(&["--color=1,2"]));
        assert!(matches!(result, Err(SlopError::InvalidColor { input }) if input == "1,2"));
    }

    #[test]
    fn test_nodecorations_accepts_inclusive_range() -> Result<()> {
        for level in 0..=2 {
            let args = SelectArgs {
                nodecorations: Some(level),
                ..Default::default()
            };
            assert_eq!(SelectOptions::from_args(&args)?.nodecorations, level as u8);
        }
        Ok(())
    }

    #[test]
    fn test_nodecorations_rejects_out_of_range() {
        for level in [-1, 3, 100] {
            let args = SelectArgs {
                nodecorations: Some(level),
                ..Default::default()
            };
            let result = SelectOptions::from_args(&args);
            assert!(matches!(result, Err(SlopError::InvalidRange { value }) if value == level));
        }
    }

    #[test]
    fn test_bare_nodecorations_flag_means_one() -> Result<()> {
        let args = parse(&["-n"]);
        assert_eq!(args.nodecorations, Some(1));
        assert_eq!(SelectOptions::from_args(&args)?.nodecorations, 1);
        Ok(())
    }

    #[test]
    fn test_nodecorations_with_value() {
        assert_eq!(parse(&["--nodecorations=2"]).nodecorations, Some(2));
        assert_eq!(parse(&["-n2"]).nodecorations, Some(2));
        assert_eq!(parse(&["-n=0"]).nodecorations, Some(0));
        assert_eq!(parse(&["-ln2"]).nodecorations, Some(2));
        assert_eq!(parse(&[]).nodecorations, None);
    }

    #[test]
    fn test_nodecorations_does_not_take_next_argument() {
        let args = parse(&["-n", "2"]);
        assert_eq!(args.nodecorations, Some(1));
        assert_eq!(args.positional, vec!["2"]);

        let args = parse(&["--nodecorations", "2"]);
        assert_eq!(args.nodecorations, Some(1));
        assert_eq!(args.positional, vec!["2"]);
    }

    #[test]
    fn test_attached_negative_level_is_kept() {
        let args = parse(&["-n-1"]);
        assert_eq!(args.nodecorations, Some(-1));
        assert!(matches!(
            SelectOptions::from_args(&args),
            Err(SlopError::InvalidRange { value: -1 })
        ));
    }

    #[test]
    fn test_values_of_other_flags_are_not_rewritten() {
        let args = parse(&["-f", "-n5", "-c", "1,1,1"]);
        assert_eq!(args.format.as_deref(), Some("-n5"));
        assert_eq!(args.nodecorations, None);

        let args = parse(&["-fn%x"]);
        assert_eq!(args.format.as_deref(), Some("n%x"));
        assert_eq!(args.nodecorations, None);
    }

    #[test]
    fn test_unknown_flag_is_invalid_arguments() {
        let result = SelectArgs::from_command_line(["slop", "--bogus"]);
        assert!(matches!(result, Err(SlopError::InvalidArguments { .. })));
    }

    #[test]
    fn test_shader_list_keeps_order_and_duplicates() -> Result<()> {
        let options = SelectOptions::from_args(&parse(&["-r", "wiggle,blur,wiggle"]))?;
        assert_eq!(options.shaders, vec!["wiggle", "blur", "wiggle"]);
        Ok(())
    }

    #[test]
    fn test_split_keeps_empty_segments() {
        assert_eq!(split_on_delimiter("a,b,", ','), vec!["a", "b", ""]);
        assert_eq!(split_on_delimiter("a,,b", ','), vec!["a", "", "b"]);
        assert_eq!(split_on_delimiter("", ','), vec![""]);
        assert_eq!(split_on_delimiter("textured", ','), vec!["textured"]);
    }

    #[test]
    fn test_positional_arguments_are_collected() {
        let args = parse(&["-l", "extra"]);
        assert_eq!(args.positional, vec!["extra"]);
    }

    #[test]
    fn test_xdisplay_is_passed_through() -> Result<()> {
        let options = SelectOptions::from_args(&parse(&["-x", ":1.0"]))?;
        assert_eq!(options.xdisplay, ":1.0");
        Ok(())
    }
}
