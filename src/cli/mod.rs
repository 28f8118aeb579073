//! Argument capture, classification and the date pipeline.

pub mod args;
pub mod classify;
pub mod help;
pub mod request;
pub mod run;

pub use args::Cli;
pub use request::DateRequest;
pub use run::{Shortcut, execute};
