//! Storage infrastructure: the per-user config file.
//!
//! - `config_root` resolves the base directory (platform default or an
//!   explicit override).
//! - `config_file` checks, creates and reads `<root>/<title>/config.json`.

pub mod config_file;
pub mod config_root;
