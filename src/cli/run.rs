//! The pdate pipeline: parse, resolve, generate, format.

use chrono::NaiveDate;

use super::classify::Flag;
use super::help::{HELP_MESSAGE, version};
use super::request::DateRequest;
use crate::core::{format_dates, generate};
use crate::error::Result;
use crate::storage::{Config, ResolvedConfig};

/// Flags that replace the whole run with a fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Help,
    Version,
}

impl Shortcut {
    /// Scan for `-h`/`--help` (first priority) or `-v`/`--version` anywhere in
    /// the tokens, before any other processing.
    #[must_use]
    pub fn detect<S: AsRef<str>>(tokens: &[S]) -> Option<Self> {
        let flags: Vec<Flag> = tokens
            .iter()
            .filter_map(|token| Flag::from_token(token.as_ref()))
            .collect();
        if flags.contains(&Flag::Help) {
            Some(Self::Help)
        } else if flags.contains(&Flag::Version) {
            Some(Self::Version)
        } else {
            None
        }
    }

    /// Text to print.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Help => HELP_MESSAGE,
            Self::Version => version(),
        }
    }
}

/// Run the pipeline and return the output lines.
///
/// `today` is the local calendar day; it is a parameter so that runs are
/// reproducible.
///
/// # Errors
///
/// Returns the first argument, validation or configuration error. No lines
/// are produced on error.
pub fn execute<S: AsRef<str>>(
    tokens: &[S],
    config: &Config,
    today: NaiveDate,
) -> Result<Vec<String>> {
    let request = DateRequest::parse(tokens)?;
    let resolved = ResolvedConfig::resolve(&request, config)?;

    let dates = generate(&request.dates, today, request.excluded(), request.reversed);
    tracing::info!(
        bounds = request.dates.len(),
        ignored = request.ignored.len(),
        reversed = request.reversed,
        days = dates.len(),
        "Generated dates"
    );
    if dates.is_empty() {
        tracing::warn!("Every date in the range was filtered out");
    }

    Ok(format_dates(&dates, resolved.template.as_deref(), resolved.language))
}
