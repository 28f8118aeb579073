//! Placeholder substitution for output templates.
//!
//! | Placeholder | Value                         |
//! |-------------|-------------------------------|
//! | `{YYYY}`    | year, 4 digits                |
//! | `{YY}`      | year mod 100, 2 digits        |
//! | `{MM}`/`{M}`| month, padded / unpadded      |
//! | `{DD}`/`{D}`| day, padded / unpadded        |
//! | `{MN}`/`{mn}` | month name, full / short    |
//! | `{WD}`/`{wd}` | weekday name, full / short  |
//!
//! Substitution is a single pass: text produced by one placeholder is never
//! scanned again, and unknown `{...}` tokens are left alone.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::{Captures, Regex};

use super::language::Language;

/// Template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = "{YYYY}-{MM}-{DD}";

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(YYYY|YY|MM|M|DD|D|MN|mn|WD|wd)\}").unwrap());

/// Render one date through `template`.
#[must_use]
pub fn format_date(date: NaiveDate, template: &str, language: Language) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures<'_>| {
            placeholder_value(&caps[1], date, language)
        })
        .into_owned()
}

fn placeholder_value(name: &str, date: NaiveDate, language: Language) -> String {
    match name {
        "YYYY" => format!("{:04}", date.year()),
        "YY" => format!("{:02}", date.year().rem_euclid(100)),
        "MM" => format!("{:02}", date.month()),
        "M" => date.month().to_string(),
        "DD" => format!("{:02}", date.day()),
        "D" => date.day().to_string(),
        "MN" => language.month_name(date).to_string(),
        "mn" => language.short_form(language.month_name(date)).to_string(),
        "WD" => language.weekday_name(date).to_string(),
        "wd" => language.short_form(language.weekday_name(date)).to_string(),
        // The regex only captures the names above.
        other => format!("{{{other}}}"),
    }
}

/// Render every date, keeping order. An empty or missing template means
/// [`DEFAULT_TEMPLATE`].
#[must_use]
pub fn format_dates(
    dates: &[NaiveDate],
    template: Option<&str>,
    language: Language,
) -> Vec<String> {
    let template = template
        .filter(|template| !template.is_empty())
        .unwrap_or(DEFAULT_TEMPLATE);
    dates
        .iter()
        .map(|date| format_date(*date, template, language))
        .collect()
}
