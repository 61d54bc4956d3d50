use crate::primitives::*;
use std::sync::OnceLock;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Process-wide tracing setup; log lines are routed around active spinners
#[derive(Debug)]
pub struct Logger {
    config: LoggerConfig,
}

impl Logger {
    /// Install the subscriber once per process
    pub fn init(config: LoggerConfig) -> Result<&'static Self, LoggerError> {
        if GLOBAL_LOGGER.get().is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }

        // Spinners and log lines share the terminal through this layer
        let indicatif_layer = IndicatifLayer::new();

        // RUST_LOG wins over the configured verbosity
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter(config.level)));

        let ansi = config.terminal_caps.supports_color();

        let writer = match config.output {
            LogOutput::Stderr => BoxMakeWriter::new(indicatif_layer.get_stderr_writer()),
            LogOutput::Stdout => BoxMakeWriter::new(indicatif_layer.get_stdout_writer()),
        };
        let layer = fmt::layer().with_writer(writer);
        let fmt_layer = match config.format {
            LogFormat::Text => layer.with_ansi(ansi).compact().boxed(),
            LogFormat::Json => layer.with_ansi(false).json().boxed(),
            LogFormat::Pretty => layer.with_ansi(ansi).pretty().boxed(),
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(indicatif_layer)
            .try_init()
            .map_err(|e| LoggerError::InitializationFailed {
                reason: e.to_string(),
            })?;

        GLOBAL_LOGGER
            .set(Logger {
                config: config.clone(),
            })
            .map_err(|_| LoggerError::AlreadyInitialized)?;

        tracing::debug!(
            level = ?config.level,
            format = ?config.format,
            output = ?config.output,
            color_support = ?config.terminal_caps.color,
            "Logger initialized"
        );

        GLOBAL_LOGGER.get().ok_or(LoggerError::AlreadyInitialized)
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }
}

/// Filter used when RUST_LOG is unset: our crates at the configured level,
/// file-walking dependencies held at warn.
pub fn default_filter(level: LogLevel) -> String {
    let level = level.as_filter_directive();
    format!("depview={level},depview_lib={level},globset=warn,walkdir=warn,{level}")
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
