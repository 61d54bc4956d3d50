//! User-level settings.
//!
//! A TOML file owned by the user, layered defaults -> file -> command-line
//! flags. A resolution only ever borrows the finished snapshot.

use super::rules::{RuleError, RuleToggles};
use crate::application::session::FileSystemProvider;
use crate::primitives::{GraphDirection, LineShape, LocateStrategy, OutputType, ThemeName};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default settings values
pub mod defaults {
    pub const TSCONFIG_PATTERN: &str = "tsconfig.json";
    pub const TSCONFIG_NAMES: &str = "tsconfig.json";
    pub const ENABLE_OVERRIDE_FILE: bool = true;
    pub const AUTO_SELECT_CLOSEST: bool = true;
    pub const SETTINGS_FILE_NAME: &str = "settings.toml";
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Invalid settings file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Rule(#[from] RuleError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AnalysisSettings {
    /// Glob matched against workspace-relative paths
    pub tsconfig_pattern: String,
    pub enable_override_file: bool,
    pub auto_select_closest: bool,
    pub locate_strategy: LocateStrategy,
    /// Comma-separated names probed by the ancestor walk
    pub tsconfig_names: String,
    pub output_type: OutputType,
    pub include_only: Option<String>,
    pub exclude: Option<String>,
    pub collapse_pattern: Option<String>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            tsconfig_pattern: defaults::TSCONFIG_PATTERN.to_string(),
            enable_override_file: defaults::ENABLE_OVERRIDE_FILE,
            auto_select_closest: defaults::AUTO_SELECT_CLOSEST,
            locate_strategy: LocateStrategy::default(),
            tsconfig_names: defaults::TSCONFIG_NAMES.to_string(),
            output_type: OutputType::default(),
            include_only: None,
            exclude: None,
            collapse_pattern: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GraphSettings {
    pub theme: ThemeName,
    pub direction: GraphDirection,
    pub line_shape: Option<LineShape>,
}

/// Immutable snapshot of user preferences for one resolution
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub analysis: AnalysisSettings,
    pub rules: RuleToggles,
    pub graph: GraphSettings,
}

/// Command-line values laid over the settings file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
    pub theme: Option<ThemeName>,
    pub direction: Option<GraphDirection>,
    pub line_shape: Option<LineShape>,
    pub output_type: Option<OutputType>,
    pub tsconfig_pattern: Option<String>,
    pub locate_strategy: Option<LocateStrategy>,
    pub no_override_file: bool,
    pub include_only: Option<String>,
    pub exclude: Option<String>,
    pub enable_rules: Vec<String>,
    pub disable_rules: Vec<String>,
}

/// `<user config dir>/settings.toml`, when the platform has a config dir
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("design", "inherent", "depview")
        .map(|dirs| dirs.config_dir().join(defaults::SETTINGS_FILE_NAME))
}

impl Settings {
    /// Parse settings text; unknown rule names are kept and reported
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(text).map_err(|source| SettingsError::Parse {
            path: origin.display().to_string(),
            source,
        })?;

        for name in settings.rules.unknown_names() {
            tracing::warn!(rule = name, path = %origin.display(), "Ignoring unknown rule toggle");
        }

        Ok(settings)
    }

    /// Load from `path`, or the default location when `None`.
    ///
    /// A missing file yields the built-in defaults.
    pub fn load(filesystem: &dyn FileSystemProvider, path: Option<&Path>) -> Result<Self, SettingsError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_path() {
                Some(path) => path,
                None => {
                    tracing::debug!("No user config directory, using default settings");
                    return Ok(Self::default());
                }
            },
        };

        if !filesystem.is_file(&path) {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }

        let text = filesystem
            .read_to_string(&path)
            .map_err(|e| SettingsError::Read {
                path: path.display().to_string(),
                reason: format!("{e:#}"),
            })?;

        tracing::debug!(path = %path.display(), "Loaded settings file");
        Self::from_toml_str(&text, &path)
    }

    /// Lay command-line values over these settings
    pub fn apply_overrides(mut self, overrides: &SettingsOverrides) -> Result<Self, SettingsError> {
        if let Some(theme) = overrides.theme {
            self.graph.theme = theme;
        }
        if let Some(direction) = overrides.direction {
            self.graph.direction = direction;
        }
        if overrides.line_shape.is_some() {
            self.graph.line_shape = overrides.line_shape;
        }
        if let Some(output_type) = overrides.output_type {
            self.analysis.output_type = output_type;
        }
        if let Some(pattern) = &overrides.tsconfig_pattern {
            self.analysis.tsconfig_pattern = pattern.clone();
        }
        if let Some(strategy) = overrides.locate_strategy {
            self.analysis.locate_strategy = strategy;
        }
        if overrides.no_override_file {
            self.analysis.enable_override_file = false;
        }
        if overrides.include_only.is_some() {
            self.analysis.include_only = overrides.include_only.clone();
        }
        if overrides.exclude.is_some() {
            self.analysis.exclude = overrides.exclude.clone();
        }

        for name in &overrides.enable_rules {
            self.rules.set(name, true)?;
        }
        for name in &overrides.disable_rules {
            self.rules.set(name, false)?;
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    include!("settings.test.rs");
}
