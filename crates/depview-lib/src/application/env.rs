//! Color and CI conventions from the process environment

use crate::primitives::{ConfigError, TerminalCapsDetectIntent};
use serde::Deserialize;

/// Conventional variables read from the process environment
///
/// Only color and CI handling look at these; everything depview-specific
/// comes through clap's `DEPVIEW_*` env fallbacks instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    pub no_color: Option<String>,
    pub force_color: Option<String>,
    pub clicolor: Option<String>,
    pub ci: Option<String>,
}

impl EnvironmentConfig {
    /// Load environment configuration from current environment
    pub fn load() -> Result<Self, ConfigError> {
        envy::from_env().map_err(|e| ConfigError::EnvironmentParsingFailed { source: e })
    }

    /// Load from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars).map_err(|e| ConfigError::EnvironmentParsingFailed { source: e })
    }

    /// Whether we run under continuous integration
    pub fn is_ci(&self) -> bool {
        self.ci
            .as_deref()
            .is_some_and(|ci| !ci.is_empty() && ci != "0" && !ci.eq_ignore_ascii_case("false"))
    }

    /// Fold the color conventions into `color`
    ///
    /// CI always disables color. Otherwise `FORCE_COLOR` beats `NO_COLOR`,
    /// which beats `CLICOLOR=0`.
    pub fn apply_color_config(&self, color: TerminalCapsDetectIntent) -> TerminalCapsDetectIntent {
        if self.is_ci() {
            return TerminalCapsDetectIntent::Never;
        }

        let forced = match self.force_color.as_deref() {
            Some("0" | "false") => Some(TerminalCapsDetectIntent::Never),
            Some("1" | "2" | "3" | "true") => Some(TerminalCapsDetectIntent::Always),
            _ => None,
        };
        let disabled = self.no_color.as_deref().is_some_and(|v| !v.is_empty())
            || self.clicolor.as_deref() == Some("0");

        match forced {
            Some(intent) => intent,
            None if disabled => TerminalCapsDetectIntent::Never,
            None => color,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}
