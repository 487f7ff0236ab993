use crate::core::{
    error::{Result, SlopError},
    format::{self, DEFAULT_FORMAT},
    help::help_text,
    options::{SelectArgs, SelectOptions},
    selection::SelectionProvider,
};
use std::io::Write;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Run one selection from parsed flags and return the process exit code
///
/// Rendered output goes to `out`; the cancellation notice goes to `err`.
/// Any returned error is fatal and left to the caller to report.
pub fn execute_select<P, O, E>(
    args: SelectArgs,
    provider: &mut P,
    out: &mut O,
    err: &mut E,
) -> Result<i32>
where
    P: SelectionProvider + ?Sized,
    O: Write,
    E: Write,
{
    if let Some(argument) = args.positional.first() {
        return Err(SlopError::unexpected_argument(argument));
    }

    if args.help {
        out.write_all(help_text().as_bytes())?;
        return Ok(EXIT_SUCCESS);
    }

    if args.version {
        writeln!(out, "{}", env!("CARGO_PKG_VERSION"))?;
        return Ok(EXIT_SUCCESS);
    }

    let options = SelectOptions::from_args(&args)?;
    log::debug!("Selection options: {options:?}");

    // Reject a bad template before asking the user for anything
    if let Some(template) = &args.format {
        format::validate(template)?;
        log::debug!("Format template {template:?} is valid");
    }

    let quiet = options.quiet;
    let selection = provider.select(options)?;

    if selection.cancelled {
        if !quiet {
            writeln!(err, "Selection was cancelled by keystroke or right-click.")?;
        }
        return Ok(EXIT_FAILURE);
    }

    let template = args.format.as_deref().unwrap_or(DEFAULT_FORMAT);
    out.write_all(format::render(template, &selection)?.as_bytes())?;
    Ok(EXIT_SUCCESS)
}
