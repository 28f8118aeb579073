//! Error rendering for pdate.
//!
//! Errors are written to stderr as a header line with the error code,
//! followed by an optional hint. Color is applied only when requested.

use colored::Colorize;

use crate::error::PdateError;

/// Render an error, styled when `color` is set.
#[must_use]
pub fn render_error(error: &PdateError, color: bool) -> String {
    if color {
        render_colored(error)
    } else {
        render_simple(error)
    }
}

/// Render error as simple text (no ANSI codes).
fn render_simple(error: &PdateError) -> String {
    let mut lines = vec![format!("Error [{}]: {}", error.error_code(), error)];
    if let Some(hint) = error.hint() {
        lines.push(format!("Hint: {hint}"));
    }
    lines.join("\n")
}

fn render_colored(error: &PdateError) -> String {
    let mut lines = vec![format!(
        "{} {} {}",
        "Error".red().bold(),
        format!("[{}]:", error.error_code()).dimmed(),
        error.to_string().red()
    )];
    if let Some(hint) = error.hint() {
        lines.push(format!("{} {}", "Hint:".cyan().bold(), hint));
    }
    lines.join("\n")
}
