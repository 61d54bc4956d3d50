//! Configuration loading and global state management
//!
//! Coordinates loading configuration from various sources and provides
//! global application configuration access.

use crate::primitives::ConfigError;
use std::path::Path;

use super::{config::AppConfig, env::EnvironmentConfig};

/// Env files read before the command line is parsed, highest precedence first
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load `.env.local` and `.env` from `dir` when present
///
/// Variables already set in the process environment are left alone.
pub fn load_env_files(dir: &Path) -> Result<(), ConfigError> {
    for env_file in ENV_FILES {
        let path = dir.join(env_file);
        if !path.is_file() {
            continue;
        }
        dotenvy::from_path(&path).map_err(|source| ConfigError::EnvFileError {
            file: path.display().to_string(),
            source,
        })?;
        tracing::debug!(file = %path.display(), "Loaded env file");
    }
    Ok(())
}

impl AppConfig {
    /// Layer config: defaults -> env vars -> CLI, then validate
    ///
    /// Env files must already be loaded so clap's `env` fallbacks see them.
    pub fn load_with(cli_config: AppConfig) -> Result<Self, ConfigError> {
        Self::load_layers(EnvironmentConfig::load()?, cli_config)
    }

    pub(crate) fn load_layers(env_config: EnvironmentConfig, cli_config: AppConfig) -> Result<Self, ConfigError> {
        // 1. Start with defaults
        let mut config = Self::default();

        // 2. Standard environment variables
        config.color = env_config.apply_color_config(config.color);
        if env_config.is_ci() {
            config.yes = true;
        }

        // 3. Override with CLI arguments (highest precedence)
        config = config.merge_with(cli_config);

        // 4. Post-process and validate
        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
