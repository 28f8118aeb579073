//! Configuration file loading and resolution.
//!
//! Loads configuration from `<config dir>/pdate/config.toml`
//! (`~/.config/pdate/config.toml` on Linux), or from `PDATE_CONFIG`.
//!
//! ## Precedence
//!
//! Settings are resolved with the following precedence (highest first):
//! 1. CLI flags (`-f`, `-l`)
//! 2. Environment variables
//! 3. Config file
//! 4. Built-in defaults
//!
//! ## Environment Variables
//!
//! - `PDATE_FORMAT`: default output template
//! - `PDATE_LANG`: default language code
//! - `PDATE_CONFIG`: override config file path

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::AppPaths;
use crate::cli::request::DateRequest;
use crate::core::language::Language;
use crate::core::logging::{LogFormat, LogLevel};
use crate::error::{PdateError, Result};

/// Environment variable for the default output template.
pub const ENV_FORMAT: &str = "PDATE_FORMAT";
/// Environment variable for the default language.
pub const ENV_LANG: &str = "PDATE_LANG";
/// Environment variable to override config file path.
pub const ENV_CONFIG: &str = "PDATE_CONFIG";

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Output settings after merging CLI, env vars and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Output template; `None` means the built-in default.
    pub template: Option<String>,
    /// Language for month and weekday names.
    pub language: Language,
    /// Source of each setting for debugging.
    pub sources: ConfigSources,
}

/// Tracks the source of each configuration value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSources {
    pub template: ConfigSource,
    pub language: ConfigSource,
}

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Value from CLI flag.
    Cli,
    /// Value from environment variable.
    Env,
    /// Value from config file.
    ConfigFile,
    /// Built-in default.
    #[default]
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI flag"),
            Self::Env => write!(f, "environment variable"),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

impl ResolvedConfig {
    /// Resolve output settings for a request.
    ///
    /// # Errors
    ///
    /// Returns an error if `PDATE_LANG` or the config file names an unknown
    /// language.
    pub fn resolve(request: &DateRequest, config: &Config) -> Result<Self> {
        let mut sources = ConfigSources::default();
        let template = Self::resolve_template(request, config, &mut sources.template);
        let language = Self::resolve_language(request, config, &mut sources.language)?;

        tracing::debug!(
            template = ?template,
            template_source = %sources.template,
            language = %language,
            language_source = %sources.language,
            "Resolved output settings"
        );

        Ok(Self {
            template,
            language,
            sources,
        })
    }

    fn resolve_template(
        request: &DateRequest,
        config: &Config,
        source: &mut ConfigSource,
    ) -> Option<String> {
        // 1. CLI -f
        if let Some(format) = &request.format {
            *source = ConfigSource::Cli;
            return Some(format.clone());
        }

        // 2. Environment variable
        if let Some(format) = non_empty_env(ENV_FORMAT) {
            *source = ConfigSource::Env;
            return Some(format);
        }

        // 3. Config file
        if let Some(format) = &config.output.format {
            *source = ConfigSource::ConfigFile;
            return Some(format.clone());
        }

        // 4. Default
        *source = ConfigSource::Default;
        None
    }

    fn resolve_language(
        request: &DateRequest,
        config: &Config,
        source: &mut ConfigSource,
    ) -> Result<Language> {
        // 1. CLI -l
        if let Some(language) = request.language {
            *source = ConfigSource::Cli;
            return Ok(language);
        }

        // 2. Environment variable
        if let Some(code) = non_empty_env(ENV_LANG) {
            *source = ConfigSource::Env;
            return Language::from_code(code.trim());
        }

        // 3. Config file
        if let Some(code) = &config.output.language {
            *source = ConfigSource::ConfigFile;
            return Language::from_code(code);
        }

        // 4. Default
        *source = ConfigSource::Default;
        Ok(Language::default())
    }
}

fn non_empty_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}

// =============================================================================
// Config File
// =============================================================================

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output settings.
    pub output: OutputConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Output formatting configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default template, e.g. `"{DD}.{MM}.{YYYY}"`.
    pub format: Option<String>,
    /// Default language code.
    pub language: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace).
    pub level: Option<String>,
    /// Log format (human, compact, json).
    pub format: Option<String>,
}

impl Config {
    /// Config file location: `PDATE_CONFIG` if set, else the platform default.
    #[must_use]
    pub fn path() -> PathBuf {
        match std::env::var(ENV_CONFIG) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path.trim()),
            _ => AppPaths::new().config_file(),
        }
    }

    /// Load and validate configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is unreadable or invalid.
    pub fn load_validated(path: &Path) -> Result<Self> {
        let config = Self::load_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific path.
    ///
    /// Returns default config if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| PdateError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string().trim().to_string(),
        })
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`PdateError::ConfigInvalid`] naming the first bad key.
    pub fn validate(&self) -> Result<()> {
        if let Some(code) = &self.output.language {
            Language::from_code(code).map_err(|_| PdateError::ConfigInvalid {
                key: "output.language".to_string(),
                value: code.clone(),
                message: "unknown language code".to_string(),
            })?;
        }

        if let Some(level) = &self.logging.level {
            if LogLevel::from_arg(level).is_none() {
                return Err(PdateError::ConfigInvalid {
                    key: "logging.level".to_string(),
                    value: level.clone(),
                    message: "expected one of error, warn, info, debug, trace".to_string(),
                });
            }
        }

        if let Some(format) = &self.logging.format {
            if LogFormat::from_arg(format).is_none() {
                return Err(PdateError::ConfigInvalid {
                    key: "logging.format".to_string(),
                    value: format.clone(),
                    message: "expected one of human, compact, json".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Log level from the config file, if set.
    #[must_use]
    pub fn log_level(&self) -> Option<LogLevel> {
        self.logging.level.as_deref().and_then(LogLevel::from_arg)
    }

    /// Log format from the config file, if set.
    #[must_use]
    pub fn log_format(&self) -> Option<LogFormat> {
        self.logging.format.as_deref().and_then(LogFormat::from_arg)
    }
}
