//! Token classification.
//!
//! Every raw argument is exactly one of:
//! - a **flag** from the fixed vocabulary (`-i`, `-f`, `-r`, `-l`, `-h`/`--help`,
//!   `-v`/`--version`)
//! - a **date** matching `YYYY-M-D`
//! - a **value** belonging to the most recent flag
//!
//! Flags never consume date-shaped tokens: `-f 2025-1-1` leaves `-f` without
//! an argument and adds a date.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{PdateError, Result};

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})$").unwrap());

/// A recognized flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// `-i <days>...`
    Ignore,
    /// `-f <format>`
    Format,
    /// `-r`
    Reverse,
    /// `-l <language>`
    Language,
    /// `-h`, `--help`
    Help,
    /// `-v`, `--version`
    Version,
}

impl Flag {
    /// Look up a `-`-prefixed token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "-i" => Some(Self::Ignore),
            "-f" => Some(Self::Format),
            "-r" => Some(Self::Reverse),
            "-l" => Some(Self::Language),
            "-h" | "--help" => Some(Self::Help),
            "-v" | "--version" => Some(Self::Version),
            _ => None,
        }
    }

    /// Short spelling used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "-i",
            Self::Format => "-f",
            Self::Reverse => "-r",
            Self::Language => "-l",
            Self::Help => "-h",
            Self::Version => "-v",
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a token was classified as, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Date,
    Flag,
    Value,
}

/// Output of [`classify`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    /// Dates in input order.
    pub dates: Vec<NaiveDate>,
    /// Flags in input order with the values that followed them.
    pub options: Vec<(Flag, Vec<String>)>,
    /// Values seen before any flag.
    pub orphans: Vec<String>,
    /// One entry per input token.
    pub kinds: Vec<TokenKind>,
}

impl Classified {
    /// Arguments of `flag`, if it was given.
    #[must_use]
    pub fn args(&self, flag: Flag) -> Option<&[String]> {
        self.options
            .iter()
            .find(|(seen, _)| *seen == flag)
            .map(|(_, args)| args.as_slice())
    }

    #[must_use]
    pub fn has(&self, flag: Flag) -> bool {
        self.args(flag).is_some()
    }
}

/// Parse a strict `YYYY-M-D` date.
///
/// Returns `Ok(None)` when the token is not date-shaped at all, and an error
/// when it is date-shaped but names no real day (month 13, Feb 30, year 0).
///
/// # Errors
///
/// Returns [`PdateError::InvalidDate`] for impossible calendar dates.
pub fn parse_date(token: &str) -> Result<Option<NaiveDate>> {
    let Some(caps) = DATE_REGEX.captures(token) else {
        return Ok(None);
    };
    let invalid = || PdateError::InvalidDate(token.to_string());
    let year: i32 = caps[1].parse().map_err(|_| invalid())?;
    let month: u32 = caps[2].parse().map_err(|_| invalid())?;
    let day: u32 = caps[3].parse().map_err(|_| invalid())?;
    if year == 0 {
        return Err(invalid());
    }
    NaiveDate::from_ymd_opt(year, month, day)
        .map(Some)
        .ok_or_else(invalid)
}

/// Classify raw tokens in a single left-to-right pass.
///
/// # Errors
///
/// Fails on an empty token, an unknown or repeated flag, or an impossible
/// date.
pub fn classify<S: AsRef<str>>(tokens: &[S]) -> Result<Classified> {
    let mut classified = Classified::default();
    let mut current: Option<usize> = None;

    for token in tokens {
        let token = token.as_ref();
        if token.is_empty() {
            return Err(PdateError::EmptyArgument);
        }

        if token.starts_with('-') {
            let flag =
                Flag::from_token(token).ok_or_else(|| PdateError::UnknownFlag(token.to_string()))?;
            if classified.has(flag) {
                return Err(PdateError::DuplicateFlag(token.to_string()));
            }
            classified.options.push((flag, Vec::new()));
            classified.kinds.push(TokenKind::Flag);
            current = Some(classified.options.len() - 1);
        } else if let Some(date) = parse_date(token)? {
            classified.dates.push(date);
            classified.kinds.push(TokenKind::Date);
        } else {
            match current {
                Some(index) => classified.options[index].1.push(token.to_string()),
                None => classified.orphans.push(token.to_string()),
            }
            classified.kinds.push(TokenKind::Value);
        }
    }

    tracing::debug!(
        tokens = tokens.len(),
        dates = classified.dates.len(),
        flags = classified.options.len(),
        orphans = classified.orphans.len(),
        "Classified arguments"
    );
    Ok(classified)
}
