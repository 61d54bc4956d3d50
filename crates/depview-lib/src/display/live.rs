//! Live display provider implementation
//!
//! Production implementation backed by the global [`Display`].

use super::Display;
use super::progress::SpinnerTracker;
use super::providers::*;
use std::io::Write;

/// Live implementation of DisplayProvider
#[derive(Debug, Default)]
pub struct LiveDisplayProvider;

impl LiveDisplayProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayProvider for LiveDisplayProvider {
    fn status(&self) -> Box<dyn StatusProvider + '_> {
        Box::new(LiveStatusProvider)
    }

    fn progress(&self) -> Box<dyn ProgressProvider + '_> {
        Box::new(LiveProgressProvider)
    }

    fn emit(&self, payload: &str) {
        let mut stdout = std::io::stdout().lock();
        // A closed pipe (e.g. `| head`) is not an error worth reporting
        let _ = writeln!(stdout, "{}", payload);
        let _ = stdout.flush();
    }
}

struct LiveStatusProvider;

impl StatusProvider for LiveStatusProvider {
    fn success(&self, item: &str, details: &str) {
        Display::status().success(item, details);
    }

    fn warning(&self, message: &str) {
        Display::status().warning(message);
    }

    fn info(&self, message: &str) {
        Display::status().info(message);
    }

    fn message(&self, text: &str) {
        Display::status().message(text);
    }

    fn subtle(&self, text: &str) {
        Display::status().subtle(text);
    }
}

struct LiveProgressProvider;

impl ProgressProvider for LiveProgressProvider {
    fn spinner(&self, message: &str) -> Box<dyn ProgressTracker> {
        Box::new(LiveProgressTracker {
            inner: Display::progress().spinner(message),
        })
    }
}

struct LiveProgressTracker {
    inner: SpinnerTracker<'static>,
}

impl ProgressTracker for LiveProgressTracker {
    fn abandon(&self, message: &str) {
        self.inner.abandon(message);
    }

    fn finish_clear(&self) {
        self.inner.finish_clear();
    }
}
