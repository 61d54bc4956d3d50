use crate::depview::settings::SettingsOverrides;
use crate::primitives::{ConfigError, GraphDirection, GraphFormat, LineShape, LocateStrategy, OutputType, ThemeName};
use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use super::config::AppConfig;

/// depview CLI - dependency graphs for a single source file
#[derive(Debug, Clone, Parser)]
#[command(name = "depview")]
#[command(about = "Resolve analysis configuration and draw dependency graphs for a source file")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// depview commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load configuration from command line arguments
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::from_cli(Cli::parse()))
    }

    /// Parse an explicit argument list (first item is the program name)
    pub fn load_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).map(Self::from_cli)
    }

    fn from_cli(cli: Cli) -> Self {
        Self {
            app_config: cli.config,
            command: cli.command,
        }
    }
}

/// The file a command works on, and where its workspace is
#[derive(Debug, Clone, PartialEq, Args)]
pub struct TargetArgs {
    /// Source file to analyze
    pub file: PathBuf,

    /// Workspace root; repeat for multi-root workspaces
    #[arg(long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Treat the file as a typed source regardless of its extension
    #[arg(long, conflicts_with = "untyped")]
    pub typed: bool,

    /// Treat the file as an untyped source regardless of its extension
    #[arg(long)]
    pub untyped: bool,
}

impl TargetArgs {
    /// Explicit typed/untyped choice, if any
    pub fn typed_override(&self) -> Option<bool> {
        match (self.typed, self.untyped) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Per-invocation values laid over the user settings file
#[derive(Debug, Clone, Default, PartialEq, Args)]
pub struct SettingsArgs {
    /// Graph theme (base, engineering, improved)
    #[arg(long)]
    pub theme: Option<ThemeName>,

    /// Graph direction (LR, TB, RL, BT)
    #[arg(long)]
    pub direction: Option<GraphDirection>,

    /// Edge routing (spline, ortho, polyline, line, curved)
    #[arg(long)]
    pub line_shape: Option<LineShape>,

    /// Reporter used by the analysis engine
    #[arg(long)]
    pub output_type: Option<OutputType>,

    /// Glob for type-configuration discovery
    #[arg(long, value_name = "GLOB")]
    pub tsconfig_pattern: Option<String>,

    /// How the type configuration is found (glob, ancestors)
    #[arg(long)]
    pub locate_strategy: Option<LocateStrategy>,

    /// Ignore the project override file
    #[arg(long)]
    pub no_override_file: bool,

    /// Only analyze modules matching this pattern
    #[arg(long, value_name = "REGEX")]
    pub include_only: Option<String>,

    /// Skip modules matching this pattern
    #[arg(long, value_name = "REGEX")]
    pub exclude: Option<String>,

    /// Enable a built-in rule (repeatable)
    #[arg(long = "rule", value_name = "NAME")]
    pub enable_rules: Vec<String>,

    /// Disable a built-in rule (repeatable)
    #[arg(long = "no-rule", value_name = "NAME")]
    pub disable_rules: Vec<String>,
}

impl SettingsArgs {
    pub fn to_overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            theme: self.theme,
            direction: self.direction,
            line_shape: self.line_shape,
            output_type: self.output_type,
            tsconfig_pattern: self.tsconfig_pattern.clone(),
            locate_strategy: self.locate_strategy,
            no_override_file: self.no_override_file,
            include_only: self.include_only.clone(),
            exclude: self.exclude.clone(),
            enable_rules: self.enable_rules.clone(),
            disable_rules: self.disable_rules.clone(),
        }
    }
}

/// Available depview commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the resolved analysis options as JSON
    Resolve {
        #[command(flatten)]
        target: TargetArgs,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Write the options to a file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Print the type-configuration file selected for a source file
    Locate {
        #[command(flatten)]
        target: TargetArgs,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// List the built-in rules and whether they are enabled
    Rules {
        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Resolve options, run the analysis engine, and render the graph
    Graph {
        #[command(flatten)]
        target: TargetArgs,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Output artifact (svg, dot)
        #[arg(long, default_value = "svg")]
        format: GraphFormat,

        /// Write the graph to a file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Resolve { .. } => "resolve",
            Commands::Locate { .. } => "locate",
            Commands::Rules { .. } => "rules",
            Commands::Graph { .. } => "graph",
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
