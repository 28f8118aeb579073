//! pdate - print every date between two bounds
//!
//! Enumerates the calendar days of a range, optionally skipping weekdays,
//! reversing the order, and formatting each day through a placeholder
//! template with localized month and weekday names.

// Note: deny (not forbid) to allow #[allow(unsafe_code)] in test helpers for env var manipulation
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod core;
pub mod error;
pub mod render;
pub mod storage;
pub mod util;

pub use error::{ExitCode, PdateError, Result};
