//! pdate - print every date between two bounds
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use pdate::cli::{Cli, Shortcut};
use pdate::core::logging;
use pdate::storage::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Help and version win over every other argument and need no config.
    if let Some(shortcut) = Shortcut::detect(&cli.tokens) {
        println!("{}", shortcut.message());
        return ExitCode::SUCCESS;
    }

    let color = pdate::util::should_use_color();
    colored::control::set_override(color);

    let config_path = Config::path();
    let config = Config::load_validated(&config_path);

    // Initialize logging
    let file_config = config.as_ref().ok();
    let log_level = cli
        .log_level
        .as_deref()
        .and_then(logging::LogLevel::from_arg)
        .or_else(|| file_config.and_then(Config::log_level))
        .unwrap_or_default();
    let log_format = cli
        .log_format
        .as_deref()
        .and_then(logging::LogFormat::from_arg)
        .or_else(|| file_config.and_then(Config::log_format))
        .unwrap_or_default();
    let log_file = logging::parse_log_file_from_env();
    logging::init(log_level, log_format, log_file);
    log_config_source(&config_path);

    match config.and_then(|config| run(&cli, &config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.error_code(), "{}", e);
            eprintln!("{}", pdate::render::render_error(&e, color));
            ExitCode::from(u8::from(e.exit_code()))
        }
    }
}

/// Config is read before logging exists, so its outcome is reported here.
fn log_config_source(path: &Path) {
    if path.exists() {
        tracing::debug!(path = %path.display(), "Read config file");
    } else {
        tracing::debug!(path = %path.display(), "Config file not found, using defaults");
    }
}

fn run(cli: &Cli, config: &Config) -> pdate::Result<()> {
    let today = pdate::core::calendar_day(&chrono::Local::now());
    let lines = pdate::cli::execute(&cli.tokens, config, today)?;
    let stdout = std::io::stdout();
    pdate::render::write_lines(&mut stdout.lock(), &lines)
}
