//! Process argument capture using clap.
//!
//! pdate's own vocabulary (`-i`, `-f`, `-r`, `-l`, `-h`, `-v`) is handled by
//! [`super::classify`], so clap only collects the raw tokens. Its built-in
//! help and version flags are disabled for that reason.
//!
//! The hidden `--log-level` and `--log-format` options are recognized only
//! before the first pdate token; everything from the first token on is
//! passed through untouched.

use clap::Parser;

use crate::core::logging::{LOG_FORMAT_ENV, LOG_LEVEL_ENV};

/// Print every date between two bounds.
#[derive(Parser, Debug)]
#[command(name = "pdate")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", env = LOG_LEVEL_ENV, hide = true)]
    pub log_level: Option<String>,

    /// Log format (human, compact, json)
    #[arg(long, value_name = "FORMAT", env = LOG_FORMAT_ENV, hide = true)]
    pub log_format: Option<String>,

    /// Dates, flags and flag values
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub tokens: Vec<String>,
}
