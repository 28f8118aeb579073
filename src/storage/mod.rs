//! Configuration file storage.

pub mod config;
pub mod paths;

pub use config::{
    Config, ConfigSource, ConfigSources, ENV_CONFIG, ENV_FORMAT, ENV_LANG, LoggingConfig,
    OutputConfig, ResolvedConfig,
};
pub use paths::AppPaths;
