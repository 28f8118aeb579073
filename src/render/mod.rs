//! Output rendering.

pub mod error;

pub use error::render_error;

use std::io::Write;

use crate::error::Result;

/// Write one line per formatted date to `out`.
///
/// # Errors
///
/// Returns an error if the writer fails (e.g. a closed pipe).
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
