//! # tn-core
//!
//! Shared domain types for the Twitch Notifications desktop shell.
//!
//! This crate has zero dependencies on the file system, OS APIs, or UI
//! frameworks.  It only describes *what* the shell talks about:
//!
//! - **`context`** – The [`AppContext`] built once at startup: application
//!   title (used as the config directory name) and window title.
//!
//! - **`config_file`** – Where the per-user config file lives
//!   ([`ConfigLocation`]) and the record returned to the frontend after
//!   checking it ([`FileCheckResult`]).
//!
//! - **`window`** – The OS colour theme and the window options derived from
//!   it ([`Theme`], [`Rgba`], [`WindowOptions`]).
//!
//! The `tn-shell` crate supplies the I/O: it checks the disk, runs the
//! platform theme queries, and hands these types to the frontend.

pub mod domain;

pub use domain::config_file::{
    CheckFailure, ConfigLocation, ErrorKind, FileCheckResult, CONFIG_FILE_NAME,
    FILE_DOES_NOT_EXIST,
};
pub use domain::context::AppContext;
pub use domain::window::{Rgba, Theme, WindowOptions};
