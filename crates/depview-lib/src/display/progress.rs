//! Progress display for long-running operations
//!
//! Spinners for the external engine runs, whose duration is unknown.

use super::styling::StyleManager;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const UNICODE_TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const ASCII_TICKS: &[&str] = &["-", "\\", "|", "/"];

/// Progress display manager for long-running operations
pub struct ProgressDisplay<'a> {
    styling: &'a StyleManager,
    visible: bool,
}

impl<'a> ProgressDisplay<'a> {
    pub(crate) fn new(styling: &'a StyleManager, visible: bool) -> Self {
        Self { styling, visible }
    }

    /// Create a spinner for operations with unknown duration
    ///
    /// Example:
    /// ```ignore
    /// let spinner = Display::progress().spinner("Computing dependency graph");
    /// // ... engine run
    /// spinner.finish_clear();
    /// ```
    pub fn spinner(&self, message: &str) -> SpinnerTracker<'a> {
        let bar = ProgressBar::new_spinner();
        bar.set_draw_target(if self.visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        });

        let (template, ticks) = if self.styling.is_unicode() {
            ("{spinner:.green} {msg}", UNICODE_TICKS)
        } else {
            ("{spinner} {msg}", ASCII_TICKS)
        };

        // The templates are fixed strings; a parse failure falls back to the default style
        let style = ProgressStyle::with_template(template)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(ticks);

        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        SpinnerTracker {
            bar,
            styling: self.styling,
        }
    }
}

/// Handle to a running spinner
pub struct SpinnerTracker<'a> {
    bar: ProgressBar,
    styling: &'a StyleManager,
}

impl<'a> SpinnerTracker<'a> {
    /// Stop with an error line
    pub fn abandon(&self, message: &str) {
        self.bar
            .abandon_with_message(self.styling.format_error(message));
    }

    pub fn finish_clear(&self) {
        self.bar.finish_and_clear();
    }

    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }
}

#[cfg(test)]
mod tests {
    include!("progress.test.rs");
}
