//! Building and validating a [`DateRequest`] from classified tokens.

use chrono::{NaiveDate, Weekday};

use super::classify::{Classified, Flag, TokenKind, classify};
use crate::core::language::Language;
use crate::core::weekday::{WeekdaySet, parse_weekday_code, weekday_code};
use crate::error::{PdateError, Result};

/// A parsed request: everything the command line asked for.
///
/// `format` and `language` are `None` when the flag was not given, so that
/// environment and config file defaults can fill them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRequest {
    /// Range bounds in input order (0 to 2 after validation).
    pub dates: Vec<NaiveDate>,
    /// Weekdays to drop, in the order given.
    pub ignored: Vec<Weekday>,
    pub reversed: bool,
    pub format: Option<String>,
    pub language: Option<Language>,
    pub help: bool,
    pub version: bool,
    kinds: Vec<TokenKind>,
}

impl DateRequest {
    /// Classify, build and validate in one go.
    ///
    /// # Errors
    ///
    /// Returns the first classification, option or validation error.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let request = Self::from_classified(classify(tokens)?)?;
        request.validate()?;
        Ok(request)
    }

    /// Interpret the arguments of each flag.
    ///
    /// # Errors
    ///
    /// Fails when a flag has the wrong number of arguments, an argument is
    /// not a weekday or language code, or a value appears before any flag.
    pub fn from_classified(classified: Classified) -> Result<Self> {
        if let Some(orphan) = classified.orphans.first() {
            return Err(PdateError::OrphanArgument(orphan.clone()));
        }

        let mut request = Self {
            dates: classified.dates,
            kinds: classified.kinds,
            ..Self::default()
        };

        for (flag, args) in classified.options {
            match flag {
                Flag::Ignore => {
                    if args.is_empty() {
                        return Err(arity(flag, "at least 1", 0));
                    }
                    request.ignored = args
                        .iter()
                        .map(|code| parse_weekday_code(code))
                        .collect::<Result<_>>()?;
                }
                Flag::Format => request.format = Some(single_arg(flag, args)?),
                Flag::Reverse => {
                    if !args.is_empty() {
                        return Err(arity(flag, "none", args.len()));
                    }
                    request.reversed = true;
                }
                Flag::Language => {
                    request.language = Some(Language::from_code(&single_arg(flag, args)?)?);
                }
                Flag::Help => request.help = true,
                Flag::Version => request.version = true,
            }
        }

        Ok(request)
    }

    /// Check the cross-token invariants.
    ///
    /// # Errors
    ///
    /// In order: more than two dates, two dates that are not adjacent, a date
    /// directly followed by an option value, a weekday ignored twice.
    pub fn validate(&self) -> Result<()> {
        if self.dates.len() > 2 {
            return Err(PdateError::TooManyDates(self.dates.len()));
        }
        if !dates_adjacent(&self.kinds) {
            return Err(PdateError::DatesNotAdjacent);
        }
        if date_before_value(&self.kinds) {
            return Err(PdateError::DateBeforeOption);
        }
        let mut seen = WeekdaySet::empty();
        for weekday in &self.ignored {
            if !seen.insert(*weekday) {
                return Err(PdateError::DuplicateWeekday(weekday_code(*weekday).to_string()));
            }
        }
        Ok(())
    }

    /// The `-i` weekdays as a set.
    #[must_use]
    pub fn excluded(&self) -> WeekdaySet {
        self.ignored.iter().copied().collect()
    }
}

fn arity(flag: Flag, expected: &'static str, found: usize) -> PdateError {
    PdateError::FlagArity {
        flag: flag.as_str(),
        expected,
        found,
    }
}

fn single_arg(flag: Flag, mut args: Vec<String>) -> Result<String> {
    if args.len() == 1 {
        Ok(args.remove(0))
    } else {
        Err(arity(flag, "exactly 1", args.len()))
    }
}

/// Every date after the first must directly follow the previous date.
fn dates_adjacent(kinds: &[TokenKind]) -> bool {
    let mut last_date: Option<usize> = None;
    for (index, kind) in kinds.iter().enumerate() {
        if *kind == TokenKind::Date {
            if let Some(previous) = last_date {
                if previous + 1 != index {
                    return false;
                }
            }
            last_date = Some(index);
        }
    }
    true
}

fn date_before_value(kinds: &[TokenKind]) -> bool {
    kinds
        .windows(2)
        .any(|pair| pair[0] == TokenKind::Date && pair[1] == TokenKind::Value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_full_request() {
        let request = DateRequest::parse(&[
            "-i", "mo", "tu", "-f", "{DD}.{MM}", "-r", "-l", "de", "2025-10-02", "2025-10-10",
        ])
        .unwrap();
        assert_eq!(request.dates, vec![date(2025, 10, 2), date(2025, 10, 10)]);
        assert_eq!(request.ignored, vec![Weekday::Mon, Weekday::Tue]);
        assert!(request.reversed);
        assert_eq!(request.format.as_deref(), Some("{DD}.{MM}"));
        assert_eq!(request.language, Some(Language::German));
        assert!(!request.help && !request.version);
        assert_eq!(request.excluded().len(), 2);
    }

    #[test]
    fn dates_may_come_first() {
        let request = DateRequest::parse(&["2025-10-02", "2025-10-10", "-i", "mo", "tu"]).unwrap();
        assert_eq!(request.dates.len(), 2);
        assert_eq!(request.ignored.len(), 2);
    }

    #[test]
    fn no_arguments_is_valid() {
        let empty: [&str; 0] = [];
        let request = DateRequest::parse(&empty).unwrap();
        assert!(request.dates.is_empty());
        assert_eq!(request.format, None);
        assert_eq!(request.language, None);
    }

    #[test]
    fn three_dates_are_rejected() {
        assert!(matches!(
            DateRequest::parse(&["2025-1-1", "2025-1-2", "2025-1-3"]),
            Err(PdateError::TooManyDates(3))
        ));
    }

    #[test]
    fn separated_dates_are_rejected() {
        assert!(matches!(
            DateRequest::parse(&["2025-1-1", "-r", "2025-1-2"]),
            Err(PdateError::DatesNotAdjacent)
        ));
    }

    #[test]
    fn date_followed_by_value_is_rejected() {
        // "mo" after the date belongs to -i but sits right after a date.
        assert!(matches!(
            DateRequest::parse(&["-i", "2025-1-1", "mo"]),
            Err(PdateError::DateBeforeOption)
        ));
    }

    #[test]
    fn date_shaped_flag_value_counts_as_date() {
        assert!(matches!(
            DateRequest::parse(&["-f", "2025-1-1"]),
            Err(PdateError::FlagArity { flag: "-f", found: 0, .. })
        ));
    }

    #[test]
    fn duplicate_weekday_is_rejected() {
        assert!(matches!(
            DateRequest::parse(&["-i", "mo", "mo"]),
            Err(PdateError::DuplicateWeekday(code)) if code == "mo"
        ));
    }

    #[test]
    fn flag_arity_errors() {
        assert!(matches!(
            DateRequest::parse(&["-i"]),
            Err(PdateError::FlagArity { flag: "-i", found: 0, .. })
        ));
        assert!(matches!(
            DateRequest::parse(&["-r", "x"]),
            Err(PdateError::FlagArity { flag: "-r", found: 1, .. })
        ));
        assert!(matches!(
            DateRequest::parse(&["-f", "a", "b"]),
            Err(PdateError::FlagArity { flag: "-f", found: 2, .. })
        ));
        assert!(matches!(
            DateRequest::parse(&["-l"]),
            Err(PdateError::FlagArity { flag: "-l", found: 0, .. })
        ));
    }

    #[test]
    fn unknown_weekday_and_language_are_rejected() {
        assert!(matches!(
            DateRequest::parse(&["-i", "xx"]),
            Err(PdateError::UnknownWeekday(code)) if code == "xx"
        ));
        assert!(matches!(
            DateRequest::parse(&["-l", "klingon"]),
            Err(PdateError::UnknownLanguage(code)) if code == "klingon"
        ));
    }

    #[test]
    fn orphan_value_is_rejected() {
        assert!(matches!(
            DateRequest::parse(&["mo", "-r"]),
            Err(PdateError::OrphanArgument(value)) if value == "mo"
        ));
    }

    #[test]
    fn help_and_version_take_no_checks_on_arguments() {
        let request = DateRequest::parse(&["-h", "whatever"]).unwrap();
        assert!(request.help);
        let request = DateRequest::parse(&["--version"]).unwrap();
        assert!(request.version);
    }

    #[test]
    fn adjacency_helpers() {
        use TokenKind::{Date, Flag, Value};
        assert!(dates_adjacent(&[Flag, Date, Date]));
        assert!(dates_adjacent(&[Date]));
        assert!(!dates_adjacent(&[Date, Flag, Date]));
        assert!(date_before_value(&[Flag, Date, Value]));
        assert!(!date_before_value(&[Flag, Value, Date]));
    }
}
