//! tn-shell library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does the shell do?
//!
//! The shell is the native half of a desktop app whose UI is a web frontend.
//! It answers three questions for that frontend:
//!
//! 1. Does the per-user config file exist, and what does it contain?
//!    (read-only check, [`infrastructure::storage::config_file`])
//! 2. Same, but create the config directory if it is missing.
//! 3. Is the OS in dark mode?  ([`infrastructure::theme`])
//!
//! The answer to (3) also decides the window background colour at startup
//! ([`application::startup`]).

/// Application layer: startup planning.
pub mod application;

/// Infrastructure layer: file system, OS theme queries, and the UI bridge.
pub mod infrastructure;
