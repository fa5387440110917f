//! Domain entities for the desktop shell.
//!
//! Nothing in here touches the disk or spawns a process.  The infrastructure
//! layer in `tn-shell` depends on these types; they never depend on it, so
//! everything below can be unit-tested on any platform without setup.

/// Config file location and check results.
pub mod config_file;

/// Startup context (application and window titles).
pub mod context;

/// Theme, colours and window options.
pub mod window;
