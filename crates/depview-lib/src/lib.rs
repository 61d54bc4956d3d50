//! # depview Library
//!
//! Decides what configuration a dependency-analysis engine gets for a single
//! source file, then hands it over and renders the resulting graph.
//!
//! ## Core Modules
//!
//! - [`depview`] - Configuration resolution: path scoring, type-configuration
//!   discovery, rule sets, layered option merging, engine boundary
//! - [`application`] - CLI interface, configuration, sessions, and commands
//! - [`display`] - Status lines, spinners, and stdout payloads
//! - [`logger`] - Structured logging with progress-aware output
//! - [`primitives`] - Foundation types, errors, and shared vocabulary
//! - [`terminal`] - Terminal capability detection
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! depview_lib::main().await
//! # }
//! ```

pub mod application;
pub mod depview;
pub mod display;
pub mod logger;
pub mod primitives;
pub mod terminal;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use depview::{ConfigFileLocator, ConfigResolver, ResolvedOptions, Settings};
pub use logger::Logger;
pub use primitives::{
    ConfigError, LogFormat, LogLevel, LogOutput, LoggerError, TerminalCapsDetectIntent, TerminalColorCaps,
};
pub use terminal::TerminalCapabilities;

// Private imports for the main function
use anyhow::{Context, Result};
use application::CliConfig;

pub async fn main() -> Result<()> {
    // .env files first so clap's env fallbacks can see them
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    application::load_env_files(&cwd)?;

    // Load CLI configuration
    let cli = CliConfig::load()?;
    let app_config = AppConfig::load_with(cli.app_config)?;

    // Execute the command
    execute_command(CliConfig {
        app_config,
        command: cli.command,
    })
    .await
}
