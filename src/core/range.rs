//! Date-range generation.
//!
//! Ranges are always inclusive and chronological. Bounds are compared as
//! calendar days: timestamps are truncated to their date in their own zone
//! before any before/after check, so 23:59 UTC and 00:00 in a zone behind
//! UTC still compare by the dates printed on them.

use chrono::{DateTime, NaiveDate, TimeZone};

use super::weekday::WeekdaySet;

/// Truncate a timestamp to the calendar day it falls on in its own zone.
#[must_use]
pub fn calendar_day<Tz: TimeZone>(moment: &DateTime<Tz>) -> NaiveDate {
    moment.date_naive()
}

/// Every day from `from` to `to`, both included, earliest first.
///
/// The bounds may be given in either order.
#[must_use]
pub fn dates_between(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let (lower, upper) = if to < from { (to, from) } else { (from, to) };
    lower.iter_days().take_while(|day| *day <= upper).collect()
}

/// The range described by zero, one or two bounds.
///
/// - no bound: just `today`
/// - one bound: from the bound to `today`
/// - two bounds: between them
///
/// Callers validate that at most two bounds are passed; extra ones are ignored.
#[must_use]
pub fn bounded_range(bounds: &[NaiveDate], today: NaiveDate) -> Vec<NaiveDate> {
    let dates = match bounds {
        [] => vec![today],
        [only] => dates_between(*only, today),
        [first, second, ..] => dates_between(*first, *second),
    };
    tracing::trace!(
        bounds = bounds.len(),
        first = ?dates.first(),
        last = ?dates.last(),
        days = dates.len(),
        "Generated date range"
    );
    dates
}

/// Drop every date whose weekday is in `excluded`, keeping order.
#[must_use]
pub fn ignore_weekdays(dates: Vec<NaiveDate>, excluded: WeekdaySet) -> Vec<NaiveDate> {
    if excluded.is_empty() {
        return dates;
    }
    dates
        .into_iter()
        .filter(|date| !excluded.excludes(*date))
        .collect()
}

/// Reverse the sequence.
#[must_use]
pub fn reverse_order(mut dates: Vec<NaiveDate>) -> Vec<NaiveDate> {
    dates.reverse();
    dates
}

/// Full pipeline: bounds, then weekday filter, then optional reversal.
#[must_use]
pub fn generate(
    bounds: &[NaiveDate],
    today: NaiveDate,
    excluded: WeekdaySet,
    reversed: bool,
) -> Vec<NaiveDate> {
    let dates = ignore_weekdays(bounded_range(bounds, today), excluded);
    if reversed { reverse_order(dates) } else { dates }
}
