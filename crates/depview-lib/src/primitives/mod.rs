//! Shared vocabulary and error types.
//!
//! Everything that is parsed both from the command line and from a file lives
//! here, so both paths accept the same spellings.

use thiserror::Error;

mod shared;

pub mod depview;
pub mod logging;
pub mod terminal;

pub use depview::*;
pub use logging::*;
pub use terminal::*;

/// Failures while assembling [`AppConfig`](crate::application::AppConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load environment file '{file}': {source}")]
    EnvFileError {
        file: String,
        source: dotenvy::Error,
    },

    #[error("Display already initialized")]
    AlreadyInitialized,

    #[error("Invalid working directory: {path}")]
    InvalidWorkDir { path: String },

    #[error("Invalid DEPVIEW_* environment: {source}")]
    EnvironmentParsingFailed {
        #[from]
        source: envy::Error,
    },

    #[error("Cannot determine the current directory: {source}")]
    CurrentDirError {
        #[from]
        source: std::io::Error,
    },

    #[error("'{value}': {reason}")]
    ParseError { value: String, reason: String },
}

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to install the tracing subscriber: {reason}")]
    InitializationFailed { reason: String },

    #[error("Logger already initialized")]
    AlreadyInitialized,
}
