//! Windows dark-mode detection via the Personalize registry key.
//!
//! `AppsUseLightTheme` is a DWORD: `0` means apps use the dark theme, `1`
//! means light.  The value is read with `reg query` so no registry bindings
//! are needed.

use super::{parse, run_query};
use crate::application::startup::{ThemeDetector, ThemeError};

const PERSONALIZE_KEY: &str = r"HKCU\Software\Microsoft\Windows\CurrentVersion\Themes\Personalize";

/// Windows implementation of [`ThemeDetector`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsThemeDetector;

impl ThemeDetector for WindowsThemeDetector {
    fn detect_dark_mode(&self) -> Result<bool, ThemeError> {
        let output = run_query(
            "reg",
            &["query", PERSONALIZE_KEY, "/v", "AppsUseLightTheme"],
        )?;
        let light = parse::apps_use_light_theme(&output).ok_or_else(|| {
            ThemeError::UnexpectedOutput {
                program: "reg",
                output: output.clone(),
            }
        })?;
        Ok(!light)
    }
}
