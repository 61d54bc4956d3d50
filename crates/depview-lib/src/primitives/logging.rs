//! Log vocabulary shared by the CLI, the environment layer and the logger.

#[cfg(test)]
use super::ConfigError;
use super::shared::impl_fromstr_for_value_enum;
use crate::terminal::TerminalCapabilities;
use clap::ValueEnum;
use serde::Deserialize;
use std::str::FromStr;

/// Where log lines go. Stdout is only useful when payloads are written with `--out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    Stderr,
    Stdout,
}

/// Verbosity ladder; `-v` count maps onto it one step at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    #[value(alias = "err")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warning,
    Info,
    Debug,
    #[value(alias = "verbose")]
    Trace,
}

/// Shape of each log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One compact line per event
    #[value(alias = "plain")]
    Text,
    /// Newline-delimited JSON objects, never coloured
    Json,
    /// Multi-line human-readable events with source locations
    Pretty,
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
    pub terminal_caps: TerminalCapabilities,
}

impl LogLevel {
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => Self::Error,
            1 => Self::Warning,
            2 => Self::Info,
            3 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter_directive(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl_fromstr_for_value_enum!(LogLevel, "invalid log level");
impl_fromstr_for_value_enum!(LogFormat, "invalid log format");
impl_fromstr_for_value_enum!(LogOutput, "invalid log output stream");

#[cfg(test)]
mod tests {
    include!("logging.test.rs");
}
