//! Terminal capability detection
//!
//! Decides color depth, unicode support, and interactivity once per process
//! so logging, status output, and spinners agree on what the terminal can do.

pub mod capabilities;

pub use capabilities::{TerminalCapabilities, TerminalEnvConfig, TerminalError};
