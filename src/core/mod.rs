//! Date ranges, weekday filters, languages and output formatting.

pub mod format;
pub mod language;
pub mod logging;
pub mod range;
pub mod weekday;

pub use format::{DEFAULT_TEMPLATE, format_date, format_dates};
pub use language::Language;
pub use range::{
    bounded_range, calendar_day, dates_between, generate, ignore_weekdays, reverse_order,
};
pub use weekday::{WeekdaySet, parse_weekday_code, weekday_code};
