//! macOS dark-mode detection via AppleScript.

use super::{parse, run_query};
use crate::application::startup::{ThemeDetector, ThemeError};

const DARK_MODE_SCRIPT: &str =
    r#"tell application "System Events" to tell appearance preferences to return dark mode"#;

/// macOS implementation of [`ThemeDetector`].
///
/// The first call may trigger the "control System Events" automation
/// permission prompt; a denied prompt surfaces as a non-zero exit status.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacosThemeDetector;

impl ThemeDetector for MacosThemeDetector {
    fn detect_dark_mode(&self) -> Result<bool, ThemeError> {
        let output = run_query("osascript", &["-e", DARK_MODE_SCRIPT])?;
        Ok(parse::osascript_dark_mode(&output))
    }
}
