//! Platform-specific dark-mode detection.
//!
//! # Platform implementations
//!
//! Each platform implements [`ThemeDetector`]; the correct one is selected at
//! compile time via `#[cfg(target_os = ...)]` and re-exported as
//! `NativeThemeDetector`:
//!
//! | Module    | OS      | Query                                                   |
//! |-----------|---------|---------------------------------------------------------|
//! | `windows` | Windows | `reg query ...\Themes\Personalize /v AppsUseLightTheme` |
//! | `macos`   | macOS   | `osascript` asking System Events for dark mode          |
//! | `linux`   | Linux   | `GTK_THEME`, `gsettings`, `kdeglobals`, `COLORFGBG`     |
//!
//! Any other OS gets [`FallbackThemeDetector`], which always reports light.
//!
//! [`StaticThemeDetector`] is always compiled: it backs the `--theme`
//! override and is handy in tests.
//!
//! The command output parsers live in [`parse`] and are compiled on every
//! platform so they can be unit-tested anywhere.

use crate::application::startup::{ThemeDetector, ThemeError};

pub mod parse;

// ── Windows implementation ────────────────────────────────────────────────────

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use windows::WindowsThemeDetector as NativeThemeDetector;

// ── macOS implementation ──────────────────────────────────────────────────────

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::MacosThemeDetector as NativeThemeDetector;

// ── Linux implementation ──────────────────────────────────────────────────────

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "linux")]
pub use linux::LinuxThemeDetector as NativeThemeDetector;

// ── Other platforms ───────────────────────────────────────────────────────────

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
pub use FallbackThemeDetector as NativeThemeDetector;

/// Reports light mode without probing anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackThemeDetector;

impl ThemeDetector for FallbackThemeDetector {
    fn detect_dark_mode(&self) -> Result<bool, ThemeError> {
        Ok(false)
    }
}

/// Always returns the configured answer.
#[derive(Debug, Clone, Copy)]
pub struct StaticThemeDetector {
    pub dark_mode: bool,
}

impl ThemeDetector for StaticThemeDetector {
    fn detect_dark_mode(&self) -> Result<bool, ThemeError> {
        Ok(self.dark_mode)
    }
}

/// Runs `program args...` and returns its stdout.
///
/// A non-zero exit status is an error; stderr is discarded.
#[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
pub(crate) fn run_query(program: &'static str, args: &[&str]) -> Result<String, ThemeError> {
    use std::process::{Command, Stdio};

    tracing::debug!(program, ?args, "running theme query");
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map_err(|source| ThemeError::Spawn { program, source })?;

    if !output.status.success() {
        return Err(ThemeError::ExitStatus {
            program,
            status: output.status,
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_detector_reports_light() {
        assert!(!FallbackThemeDetector.detect_dark_mode().expect("detect"));
    }

    #[test]
    fn test_static_detector_returns_configured_answer() {
        let dark = StaticThemeDetector { dark_mode: true };
        let light = StaticThemeDetector { dark_mode: false };

        assert!(dark.detect_dark_mode().expect("detect"));
        assert!(!light.detect_dark_mode().expect("detect"));
    }

    #[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
    #[test]
    fn test_run_query_reports_missing_program_as_spawn_error() {
        let result = run_query("tn-shell-no-such-program", &[]);
        assert!(matches!(result, Err(ThemeError::Spawn { .. })));
    }

    #[test]
    fn test_native_detector_does_not_panic() {
        // The answer depends on the machine; only the call itself is checked.
        let _ = NativeThemeDetector::default().detect_dark_mode();
    }
}
