//! Test support for depview
//!
//! Real-filesystem fixtures with automatic cleanup. In-memory providers for
//! the session live in [`crate::application::session_mocks`].

pub mod filesystem;

pub use filesystem::TempDirFixture;
