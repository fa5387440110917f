//! Infrastructure layer for the shell.
//!
//! Contains the OS-facing adapters.
//!
//! **Dependency rule**: this layer may depend on `application` and `tn_core`,
//! but MUST NOT be imported by `tn_core`.
//!
//! # Sub-modules
//!
//! - **`storage`** – Per-user config directory resolution and the config file
//!   checks exposed to the frontend.
//!
//! - **`theme`** – OS-specific dark-mode detection.  The correct implementation
//!   is selected at compile time using `#[cfg(target_os)]`.
//!
//! - **`ui_bridge`** – Command handlers the frontend calls.

pub mod storage;
pub mod theme;
pub mod ui_bridge;
