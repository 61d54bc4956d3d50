//! Display provider traits for dependency injection
//!
//! Command handlers talk to these traits only, so their user-facing output
//! can be recorded and asserted in tests.

/// Provider trait for all user-facing communication
pub trait DisplayProvider {
    /// Status messages with semantic meaning (stderr)
    fn status(&self) -> Box<dyn StatusProvider + '_>;

    /// Progress for long-running operations (stderr)
    fn progress(&self) -> Box<dyn ProgressProvider + '_>;

    /// Command payload written to stdout
    fn emit(&self, payload: &str);
}

/// Provider trait for status updates and user feedback
pub trait StatusProvider {
    fn success(&self, item: &str, details: &str);

    fn warning(&self, message: &str);

    fn info(&self, message: &str);

    fn message(&self, text: &str);

    fn subtle(&self, text: &str);

}

/// Provider trait for progress tracking
pub trait ProgressProvider {
    /// Create a spinner for operations with unknown duration
    fn spinner(&self, message: &str) -> Box<dyn ProgressTracker>;
}

/// Individual progress tracker interface
pub trait ProgressTracker {
    /// Abandon with error message
    fn abandon(&self, message: &str);

    /// Finish and clear the spinner line
    fn finish_clear(&self);
}
