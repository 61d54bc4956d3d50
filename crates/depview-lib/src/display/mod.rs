//! Terminal display system
//!
//! Semantic APIs for user-facing communication that adapt to terminal
//! capabilities. Logging (tracing) and user interaction (status, progress)
//! stay separate: status and spinners go to stderr, command payloads go
//! to stdout through [`DisplayProvider::emit`].

use crate::primitives::ConfigError;
use crate::terminal::TerminalCapabilities;
use std::sync::OnceLock;

pub mod live;
pub mod mock;
pub mod progress;
pub mod providers;
pub mod status;
pub mod styling;

pub use live::LiveDisplayProvider;
pub use mock::{DisplayCall, MockDisplayProvider};
pub use providers::{DisplayProvider, ProgressProvider, ProgressTracker, StatusProvider};

// Global display manager - initialized once with terminal capabilities
static GLOBAL_DISPLAY: OnceLock<Display> = OnceLock::new();

/// Display manager that coordinates all user-facing communication
pub struct Display {
    capabilities: TerminalCapabilities,
    styling: styling::StyleManager,
}

impl Display {
    fn new(capabilities: TerminalCapabilities) -> Self {
        let styling = styling::StyleManager::new(&capabilities);
        Self {
            capabilities,
            styling,
        }
    }

    /// Initialize global display system with terminal capabilities
    pub fn init(capabilities: TerminalCapabilities) -> Result<&'static Self, ConfigError> {
        if GLOBAL_DISPLAY.get().is_some() {
            return Err(ConfigError::AlreadyInitialized);
        }

        GLOBAL_DISPLAY
            .set(Self::new(capabilities))
            .map_err(|_| ConfigError::AlreadyInitialized)?;

        Ok(Self::global())
    }

    /// Global display reference; falls back to plain output when never initialized
    pub fn global() -> &'static Self {
        GLOBAL_DISPLAY.get_or_init(|| Self::new(TerminalCapabilities::minimal()))
    }

    /// Status updates with semantic intent
    pub fn status() -> status::StatusDisplay<'static> {
        status::StatusDisplay::new(&Self::global().styling)
    }

    /// Progress tracking for long operations
    pub fn progress() -> progress::ProgressDisplay<'static> {
        let display = Self::global();
        progress::ProgressDisplay::new(&display.styling, display.capabilities.is_tty)
    }

    pub fn capabilities() -> &'static TerminalCapabilities {
        &Self::global().capabilities
    }
}
