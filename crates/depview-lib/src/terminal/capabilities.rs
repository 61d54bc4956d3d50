use crate::application::AppConfig;
use crate::primitives::*;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("Failed to read terminal environment: {source}")]
    EnvironmentParsingFailed {
        #[from]
        source: envy::Error,
    },
}

/// Environment variables consulted during detection
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TerminalEnvConfig {
    pub term: Option<String>,
    pub colorterm: Option<String>,
    pub lang: Option<String>,
    pub lc_all: Option<String>,
    pub lc_ctype: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TerminalCapabilities {
    pub color: TerminalColorCaps,
    pub unicode: TerminalUnicodeCaps,
    pub is_tty: bool,
}

impl TerminalCapabilities {
    /// Detect capabilities from the process environment and the stderr terminal
    pub fn detect_from_config(config: &AppConfig) -> Result<Self, TerminalError> {
        let env_config = envy::from_env::<TerminalEnvConfig>()?;
        let term = console::Term::stderr();
        let is_tty = term.is_term();
        let colors_supported = term.features().colors_supported();

        Ok(Self::from_env(&env_config, config.color, is_tty, colors_supported))
    }

    /// Pure detection core, separated from the environment for testing
    pub fn from_env(
        env: &TerminalEnvConfig,
        intent: TerminalCapsDetectIntent,
        is_tty: bool,
        colors_supported: bool,
    ) -> Self {
        let detected = detect_color_level(env, is_tty && colors_supported);

        let color = match intent {
            TerminalCapsDetectIntent::Never => TerminalColorCaps::None,
            TerminalCapsDetectIntent::Always => detected.max(TerminalColorCaps::Ansi16),
            TerminalCapsDetectIntent::Auto => detected,
        };

        Self {
            color,
            unicode: detect_unicode(env),
            is_tty,
        }
    }

    /// Plain capabilities: no color, ASCII symbols, not interactive
    pub fn minimal() -> Self {
        Self {
            color: TerminalColorCaps::None,
            unicode: TerminalUnicodeCaps::Ascii,
            is_tty: false,
        }
    }

    pub fn supports_color(&self) -> bool {
        self.color != TerminalColorCaps::None
    }

    pub fn supports_unicode(&self) -> bool {
        self.unicode == TerminalUnicodeCaps::Unicode
    }
}

fn detect_color_level(env: &TerminalEnvConfig, colors_supported: bool) -> TerminalColorCaps {
    if !colors_supported {
        return TerminalColorCaps::None;
    }

    if let Some(colorterm) = &env.colorterm {
        let colorterm = colorterm.to_ascii_lowercase();
        if colorterm == "truecolor" || colorterm == "24bit" {
            return TerminalColorCaps::TrueColor;
        }
    }

    match env.term.as_deref() {
        Some("dumb") => TerminalColorCaps::None,
        Some(term) if term.contains("256color") => TerminalColorCaps::Ansi256,
        _ => TerminalColorCaps::Ansi16,
    }
}

fn detect_unicode(env: &TerminalEnvConfig) -> TerminalUnicodeCaps {
    // LC_ALL overrides LC_CTYPE, which overrides LANG
    let locale = env
        .lc_all
        .as_deref()
        .filter(|v| !v.is_empty())
        .or(env.lc_ctype.as_deref().filter(|v| !v.is_empty()))
        .or(env.lang.as_deref());

    match locale {
        Some(locale) => {
            let locale = locale.to_ascii_lowercase();
            if locale.contains("utf-8") || locale.contains("utf8") {
                TerminalUnicodeCaps::Unicode
            } else {
                TerminalUnicodeCaps::Ascii
            }
        }
        None if cfg!(windows) => TerminalUnicodeCaps::Unicode,
        None => TerminalUnicodeCaps::Ascii,
    }
}

#[cfg(test)]
mod tests {
    include!("capabilities.test.rs");
}
