//! Application layer use cases for the shell.
//!
//! - **`startup`** – Decides the window options before the GUI host opens the
//!   main window.  The OS theme is queried through a [`startup::ThemeDetector`]
//!   injected by the caller, so the use case itself never spawns a process.

pub mod startup;
