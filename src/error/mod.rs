//! Error types for pdate.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! ## Error Taxonomy
//!
//! Errors are categorized into four categories:
//! - **Argument**: a single token could not be classified or parsed
//! - **Validation**: the tokens parse but do not form a valid request
//! - **Configuration**: config file, environment or language settings
//! - **Internal**: I/O failures while reading config or writing output
//!
//! Each error has a stable error code (e.g., `PDATE-A001`) and every error
//! is raised before the first date is printed.

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A token is malformed or not part of the vocabulary.
    Argument,
    /// The request as a whole breaks an invariant.
    Validation,
    /// Configuration file, environment or language issues.
    Configuration,
    /// I/O and other unexpected failures.
    Internal,
}

impl ErrorCategory {
    /// Returns a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Argument => "Argument error",
            Self::Validation => "Validation error",
            Self::Configuration => "Configuration error",
            Self::Internal => "Internal error",
        }
    }

    /// Returns a short code prefix for this category.
    #[must_use]
    pub const fn code_prefix(&self) -> &'static str {
        match self {
            Self::Argument => "A",
            Self::Validation => "V",
            Self::Configuration => "C",
            Self::Internal => "X",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Unexpected failure (I/O)
    GeneralError = 1,
    /// Bad arguments or an invalid request
    UsageError = 2,
    /// Bad configuration file, environment value or language code
    ConfigError = 3,
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

/// Main error type for pdate.
#[derive(Error, Debug)]
pub enum PdateError {
    // ==========================================================================
    // Argument errors (Category: Argument)
    // ==========================================================================
    /// An empty string was passed as an argument.
    #[error("empty argument provided")]
    EmptyArgument,

    /// A `-`-prefixed token that is not in the flag vocabulary.
    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    /// The same flag was given twice.
    #[error("duplicate flag: {0}")]
    DuplicateFlag(String),

    /// A date-shaped token that does not name a real calendar day.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A `-i` argument that is not a weekday code.
    #[error("unknown weekday code: {0}")]
    UnknownWeekday(String),

    /// A flag received the wrong number of arguments.
    #[error("wrong number of arguments for {flag}: expected {expected}, got {found}")]
    FlagArity {
        flag: &'static str,
        expected: &'static str,
        found: usize,
    },

    /// A non-date token appeared before any flag.
    #[error("argument '{0}' does not belong to any flag")]
    OrphanArgument(String),

    // ==========================================================================
    // Validation errors (Category: Validation)
    // ==========================================================================
    /// More than two dates were supplied.
    #[error("wrong number of dates provided: expected at most 2, got {0}")]
    TooManyDates(usize),

    /// Two dates separated by a flag or option argument.
    #[error("the two dates are not next to each other")]
    DatesNotAdjacent,

    /// A date directly followed by an option argument.
    #[error("a date is directly followed by an option argument")]
    DateBeforeOption,

    /// A weekday listed twice after `-i`.
    #[error("weekday '{0}' is ignored more than once")]
    DuplicateWeekday(String),

    // ==========================================================================
    // Configuration errors (Category: Configuration)
    // ==========================================================================
    /// A language code outside the built-in tables.
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),

    /// Error parsing the configuration file.
    #[error("config parse error at {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// Invalid value in configuration.
    #[error("invalid config value for '{key}': {message}")]
    ConfigInvalid {
        key: String,
        value: String,
        message: String,
    },

    // ==========================================================================
    // I/O errors (Category: Internal)
    // ==========================================================================
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PdateError {
    /// Map error to process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.category() {
            ErrorCategory::Argument | ErrorCategory::Validation => ExitCode::UsageError,
            ErrorCategory::Configuration => ExitCode::ConfigError,
            ErrorCategory::Internal => ExitCode::GeneralError,
        }
    }

    /// Returns the error category.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyArgument
            | Self::UnknownFlag(_)
            | Self::DuplicateFlag(_)
            | Self::InvalidDate(_)
            | Self::UnknownWeekday(_)
            | Self::FlagArity { .. }
            | Self::OrphanArgument(_) => ErrorCategory::Argument,

            Self::TooManyDates(_)
            | Self::DatesNotAdjacent
            | Self::DateBeforeOption
            | Self::DuplicateWeekday(_) => ErrorCategory::Validation,

            Self::UnknownLanguage(_) | Self::ConfigParse { .. } | Self::ConfigInvalid { .. } => {
                ErrorCategory::Configuration
            }

            Self::Io(_) => ErrorCategory::Internal,
        }
    }

    /// Returns a stable error code for programmatic handling.
    ///
    /// Format: `PDATE-{category}{number}`.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyArgument => "PDATE-A001",
            Self::UnknownFlag(_) => "PDATE-A002",
            Self::DuplicateFlag(_) => "PDATE-A003",
            Self::InvalidDate(_) => "PDATE-A004",
            Self::UnknownWeekday(_) => "PDATE-A005",
            Self::FlagArity { .. } => "PDATE-A006",
            Self::OrphanArgument(_) => "PDATE-A007",

            Self::TooManyDates(_) => "PDATE-V001",
            Self::DatesNotAdjacent => "PDATE-V002",
            Self::DateBeforeOption => "PDATE-V003",
            Self::DuplicateWeekday(_) => "PDATE-V004",

            Self::UnknownLanguage(_) => "PDATE-C001",
            Self::ConfigParse { .. } => "PDATE-C002",
            Self::ConfigInvalid { .. } => "PDATE-C003",

            Self::Io(_) => "PDATE-X001",
        }
    }

    /// Returns a one-line fix hint, if there is a useful one.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::EmptyArgument => Some("remove the empty \"\" argument".to_string()),
            Self::UnknownFlag(_) | Self::DuplicateFlag(_) => {
                Some("run `pdate --help` for the list of flags".to_string())
            }
            Self::InvalidDate(_) => {
                Some("dates use YYYY-M-D and must exist in the calendar".to_string())
            }
            Self::UnknownWeekday(_) | Self::DuplicateWeekday(_) => {
                Some("weekday codes are: mo tu we th fr sa su, each at most once".to_string())
            }
            Self::FlagArity { flag, .. } => {
                Some(format!("see `pdate --help` for the usage of {flag}"))
            }
            Self::OrphanArgument(_) => {
                Some("option arguments must follow their flag, e.g. `-i mo tu`".to_string())
            }
            Self::TooManyDates(_) | Self::DatesNotAdjacent | Self::DateBeforeOption => Some(
                "pass at most two dates, side by side, e.g. `pdate -r 2025-10-02 2025-10-10`"
                    .to_string(),
            ),
            Self::UnknownLanguage(_) => Some(
                "language codes are: en fr es de ch it pt nl ru zh ar hi".to_string(),
            ),
            Self::ConfigParse { path, .. } => Some(format!("fix or remove {path}")),
            Self::ConfigInvalid { key, .. } => Some(format!("check the '{key}' entry")),
            Self::Io(_) => None,
        }
    }
}

/// Result type alias for pdate operations.
pub type Result<T> = std::result::Result<T, PdateError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample_errors() -> Vec<PdateError> {
        vec![
            PdateError::EmptyArgument,
            PdateError::UnknownFlag("-x".to_string()),
            PdateError::DuplicateFlag("-r".to_string()),
            PdateError::InvalidDate("2025-2-30".to_string()),
            PdateError::UnknownWeekday("xx".to_string()),
            PdateError::FlagArity {
                flag: "-f",
                expected: "exactly 1",
                found: 0,
            },
            PdateError::OrphanArgument("foo".to_string()),
            PdateError::TooManyDates(3),
            PdateError::DatesNotAdjacent,
            PdateError::DateBeforeOption,
            PdateError::DuplicateWeekday("mo".to_string()),
            PdateError::UnknownLanguage("xx".to_string()),
            PdateError::ConfigParse {
                path: "/tmp/config.toml".to_string(),
                message: "bad".to_string(),
            },
            PdateError::ConfigInvalid {
                key: "output.language".to_string(),
                value: "xx".to_string(),
                message: "unknown".to_string(),
            },
            PdateError::Io(std::io::Error::other("boom")),
        ]
    }

    #[test]
    fn error_category_code_prefix() {
        assert_eq!(ErrorCategory::Argument.code_prefix(), "A");
        assert_eq!(ErrorCategory::Validation.code_prefix(), "V");
        assert_eq!(ErrorCategory::Configuration.code_prefix(), "C");
        assert_eq!(ErrorCategory::Internal.code_prefix(), "X");
    }

    #[test]
    fn error_codes_follow_category_prefix() {
        for err in sample_errors() {
            let code = err.error_code();
            let expected = format!("PDATE-{}", err.category().code_prefix());
            assert!(code.starts_with(&expected), "{code} for {err:?}");
            assert_eq!(code.len(), "PDATE-A001".len());
        }
    }

    #[test]
    fn error_codes_are_unique() {
        let errors = sample_errors();
        let codes: HashSet<_> = errors.iter().map(PdateError::error_code).collect();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn exit_codes_are_correct() {
        assert_eq!(PdateError::EmptyArgument.exit_code(), ExitCode::UsageError);
        assert_eq!(PdateError::DatesNotAdjacent.exit_code(), ExitCode::UsageError);
        assert_eq!(
            PdateError::UnknownLanguage("xx".to_string()).exit_code(),
            ExitCode::ConfigError
        );
        assert_eq!(
            PdateError::Io(std::io::Error::other("x")).exit_code(),
            ExitCode::GeneralError
        );
        assert_eq!(u8::from(ExitCode::UsageError), 2);
    }

    #[test]
    fn messages_name_the_offending_token() {
        assert_eq!(
            PdateError::UnknownFlag("-x".to_string()).to_string(),
            "unknown flag: -x"
        );
        assert_eq!(
            PdateError::FlagArity {
                flag: "-l",
                expected: "exactly 1",
                found: 2
            }
            .to_string(),
            "wrong number of arguments for -l: expected exactly 1, got 2"
        );
    }

    #[test]
    fn only_io_errors_lack_hints() {
        for err in sample_errors() {
            assert_eq!(err.hint().is_none(), matches!(err, PdateError::Io(_)));
        }
    }
}
