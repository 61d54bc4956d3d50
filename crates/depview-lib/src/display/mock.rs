//! Mock display provider implementation for testing
//!
//! Records every display call for assertion in unit tests.

use super::providers::*;
use std::sync::{Arc, Mutex};

/// One recorded display interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    Success { item: String, details: String },
    Warning { message: String },
    Info { message: String },
    Message { text: String },
    Subtle { text: String },
    SpinnerStart { message: String },
    SpinnerAbandon { message: String },
    SpinnerClear,
    Emit { payload: String },
}

impl DisplayCall {
    pub fn call_type(&self) -> &'static str {
        match self {
            DisplayCall::Success { .. } => "success",
            DisplayCall::Warning { .. } => "warning",
            DisplayCall::Info { .. } => "info",
            DisplayCall::Message { .. } => "message",
            DisplayCall::Subtle { .. } => "subtle",
            DisplayCall::SpinnerStart { .. } => "spinner_start",
            DisplayCall::SpinnerAbandon { .. } => "spinner_abandon",
            DisplayCall::SpinnerClear => "spinner_clear",
            DisplayCall::Emit { .. } => "emit",
        }
    }
}

/// Mock implementation of DisplayProvider that records all calls
#[derive(Clone, Default)]
pub struct MockDisplayProvider {
    calls: Arc<Mutex<Vec<DisplayCall>>>,
}

impl MockDisplayProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_calls(&self) -> Vec<DisplayCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn has_call(&self, expected: &DisplayCall) -> bool {
        self.get_calls().contains(expected)
    }

    pub fn count_calls(&self, call_type: &str) -> usize {
        self.get_calls()
            .iter()
            .filter(|call| call.call_type() == call_type)
            .count()
    }

    /// Everything written to stdout, in order
    pub fn emitted(&self) -> Vec<String> {
        self.get_calls()
            .into_iter()
            .filter_map(|call| match call {
                DisplayCall::Emit { payload } => Some(payload),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: DisplayCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl DisplayProvider for MockDisplayProvider {
    fn status(&self) -> Box<dyn StatusProvider + '_> {
        Box::new(MockRecorder {
            calls: self.calls.clone(),
        })
    }

    fn progress(&self) -> Box<dyn ProgressProvider + '_> {
        Box::new(MockRecorder {
            calls: self.calls.clone(),
        })
    }

    fn emit(&self, payload: &str) {
        self.record(DisplayCall::Emit {
            payload: payload.to_string(),
        });
    }
}

struct MockRecorder {
    calls: Arc<Mutex<Vec<DisplayCall>>>,
}

impl MockRecorder {
    fn record(&self, call: DisplayCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl StatusProvider for MockRecorder {
    fn success(&self, item: &str, details: &str) {
        self.record(DisplayCall::Success {
            item: item.to_string(),
            details: details.to_string(),
        });
    }

    fn warning(&self, message: &str) {
        self.record(DisplayCall::Warning {
            message: message.to_string(),
        });
    }

    fn info(&self, message: &str) {
        self.record(DisplayCall::Info {
            message: message.to_string(),
        });
    }

    fn message(&self, text: &str) {
        self.record(DisplayCall::Message {
            text: text.to_string(),
        });
    }

    fn subtle(&self, text: &str) {
        self.record(DisplayCall::Subtle {
            text: text.to_string(),
        });
    }
}

impl ProgressProvider for MockRecorder {
    fn spinner(&self, message: &str) -> Box<dyn ProgressTracker> {
        self.record(DisplayCall::SpinnerStart {
            message: message.to_string(),
        });
        Box::new(MockRecorder {
            calls: self.calls.clone(),
        })
    }
}

impl ProgressTracker for MockRecorder {
    fn abandon(&self, message: &str) {
        self.record(DisplayCall::SpinnerAbandon {
            message: message.to_string(),
        });
    }

    fn finish_clear(&self) {
        self.record(DisplayCall::SpinnerClear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_status_and_payload_in_order() {
        let display = MockDisplayProvider::new();
        display.status().success("tsconfig", "src/tsconfig.json");
        display.emit("{}");

        assert_eq!(
            display.get_calls(),
            vec![
                DisplayCall::Success {
                    item: "tsconfig".to_string(),
                    details: "src/tsconfig.json".to_string(),
                },
                DisplayCall::Emit {
                    payload: "{}".to_string(),
                },
            ]
        );
        assert_eq!(display.emitted(), vec!["{}".to_string()]);
    }

    #[test]
    fn test_spinner_lifecycle_is_recorded() {
        let display = MockDisplayProvider::new();
        let spinner = display.progress().spinner("Computing");
        spinner.abandon("failed");

        assert_eq!(display.count_calls("spinner_start"), 1);
        assert!(display.has_call(&DisplayCall::SpinnerAbandon {
            message: "failed".to_string()
        }));
    }
}
