//! Process-level configuration
//!
//! Global flags shared by every subcommand. Precedence, lowest first:
//! defaults, `.env` files, environment, command line.
//! User-level analysis preferences live in [`crate::depview::settings`].

use crate::primitives::*;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

pub mod defaults {
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const TTY_CAPS_DETECT_INTENT: &str = "auto";
}

/// serde defaults mirroring [`defaults`]
mod default_fns {
    use super::*;

    pub fn log_level() -> u8 {
        defaults::LOG_LEVEL.parse().unwrap_or(0)
    }

    pub fn log_format() -> LogFormat {
        defaults::LOG_FORMAT.parse().unwrap_or(LogFormat::Text)
    }

    pub fn log_output() -> LogOutput {
        defaults::LOG_OUTPUT.parse().unwrap_or(LogOutput::Stderr)
    }

    pub fn tty_caps_detect_intent() -> TerminalCapsDetectIntent {
        defaults::TTY_CAPS_DETECT_INTENT
            .parse()
            .unwrap_or(TerminalCapsDetectIntent::Auto)
    }
}

/// Global flags
#[derive(Debug, Clone, PartialEq, Parser, Deserialize)]
pub struct AppConfig {
    /// Working directory relative targets are resolved against
    #[arg(short, long, env = "DEPVIEW_WORKDIR", global = true)]
    #[serde(default)]
    pub workdir: Option<PathBuf>,

    /// User settings file (defaults to the platform config directory)
    #[arg(long, env = "DEPVIEW_SETTINGS", global = true)]
    #[serde(default)]
    pub settings: Option<PathBuf>,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "DEPVIEW_LOG_LEVEL", default_value = defaults::LOG_LEVEL, global = true)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json, pretty)
    #[arg(long, env = "DEPVIEW_LOG_FORMAT", default_value = defaults::LOG_FORMAT, global = true)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "DEPVIEW_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT, global = true)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, env = "DEPVIEW_COLOR", default_value = defaults::TTY_CAPS_DETECT_INTENT, global = true)]
    #[serde(default = "default_fns::tty_caps_detect_intent")]
    pub color: TerminalCapsDetectIntent,

    /// Never prompt; take the best-ranked candidate instead
    #[arg(short, long, env = "DEPVIEW_YES", global = true)]
    #[serde(default)]
    pub yes: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workdir: None,
            settings: None,
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::tty_caps_detect_intent(),
            yes: false,
        }
    }
}

impl AppConfig {
    pub fn to_logger_config(&self, terminal_caps: &crate::terminal::TerminalCapabilities) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            terminal_caps: terminal_caps.clone(),
        }
    }

    /// Overlay `other`, keeping our values where `other` has defaults
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.workdir.is_some() {
            self.workdir = other.workdir;
        }
        if other.settings.is_some() {
            self.settings = other.settings;
        }

        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }
        if other.yes {
            self.yes = true;
        }

        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }
        if !matches!(other.color, TerminalCapsDetectIntent::Auto) {
            self.color = other.color;
        }

        self
    }

    /// Pin the working directory and check it exists
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        let cwd = std::env::current_dir().map_err(|e| ConfigError::CurrentDirError { source: e })?;

        match &self.workdir {
            None => self.workdir = Some(cwd),
            Some(dir) => {
                let dir = if dir.is_absolute() { dir.clone() } else { cwd.join(dir) };
                if !dir.is_dir() {
                    return Err(ConfigError::InvalidWorkDir {
                        path: dir.display().to_string(),
                    });
                }
                self.workdir = Some(dir);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
