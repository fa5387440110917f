//! Startup planning: theme detection and the main window options.
//!
//! The GUI host opens the window before the frontend has painted anything,
//! so the window background must already match the OS theme or the user
//! sees a white flash in dark mode.  [`plan_startup`] asks a
//! [`ThemeDetector`] for the theme and derives the [`WindowOptions`].
//!
//! A failing detector is not fatal: the failure is logged and the light
//! theme is used.

use std::io;
use std::process::ExitStatus;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use tn_core::{AppContext, Theme, WindowOptions};

/// Error type for OS theme detection.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The query program could not be started.
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: io::Error,
    },

    /// The query program ran but reported failure.
    #[error("'{program}' exited with {status}")]
    ExitStatus {
        program: &'static str,
        status: ExitStatus,
    },

    /// The query output did not contain the expected value.
    #[error("unexpected output from '{program}': {output:?}")]
    UnexpectedOutput {
        program: &'static str,
        output: String,
    },
}

/// Capability: "is the OS in dark mode?".
///
/// One implementation per platform lives in `infrastructure::theme`; the
/// correct one is chosen at compile time.
#[cfg_attr(test, mockall::automock)]
pub trait ThemeDetector {
    /// # Errors
    ///
    /// Returns [`ThemeError`] when the platform query fails.
    fn detect_dark_mode(&self) -> Result<bool, ThemeError>;
}

/// Everything the GUI host needs to open the main window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartupPlan {
    pub theme: Theme,
    pub window: WindowOptions,
}

/// Runs the detector, falling back to [`Theme::Light`] on error.
pub fn resolve_theme(detector: &dyn ThemeDetector) -> Theme {
    match detector.detect_dark_mode() {
        Ok(dark_mode) => Theme::from_dark_mode(dark_mode),
        Err(e) => {
            warn!("error reading dark mode, using light theme: {e}");
            Theme::Light
        }
    }
}

/// Builds the startup plan for `context`.
pub fn plan_startup(context: &AppContext, detector: &dyn ThemeDetector) -> StartupPlan {
    let theme = resolve_theme(detector);
    info!(?theme, "startup theme resolved");
    StartupPlan {
        theme,
        window: WindowOptions::for_theme(context.window_title(), theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tn_core::Rgba;

    fn failing_query() -> ThemeError {
        ThemeError::Spawn {
            program: "reg",
            source: io::Error::new(io::ErrorKind::NotFound, "no such program"),
        }
    }

    #[test]
    fn test_plan_startup_dark_mode_uses_black_background() {
        // Arrange
        let mut detector = MockThemeDetector::new();
        detector.expect_detect_dark_mode().times(1).returning(|| Ok(true));

        // Act
        let plan = plan_startup(&AppContext::default(), &detector);

        // Assert
        assert_eq!(plan.theme, Theme::Dark);
        assert_eq!(plan.window.background, Rgba::opaque(0, 0, 0));
        assert_eq!(plan.window.title, "twitch-notifications");
    }

    #[test]
    fn test_plan_startup_light_mode_uses_white_background() {
        let mut detector = MockThemeDetector::new();
        detector.expect_detect_dark_mode().returning(|| Ok(false));

        let plan = plan_startup(&AppContext::default(), &detector);

        assert_eq!(plan.theme, Theme::Light);
        assert_eq!(plan.window.background, Rgba::opaque(255, 255, 255));
    }

    #[test]
    fn test_plan_startup_falls_back_to_light_when_detection_fails() {
        // Arrange
        let mut detector = MockThemeDetector::new();
        detector
            .expect_detect_dark_mode()
            .returning(|| Err(failing_query()));

        // Act
        let plan = plan_startup(&AppContext::default(), &detector);

        // Assert
        assert_eq!(plan.theme, Theme::Light);
        assert_eq!(plan.window.width, 1024);
        assert_eq!(plan.window.height, 768);
    }

    #[test]
    fn test_plan_startup_uses_context_window_title() {
        let mut detector = MockThemeDetector::new();
        detector.expect_detect_dark_mode().returning(|| Ok(false));
        let ctx = AppContext::new("Other").with_window_title("other-window");

        let plan = plan_startup(&ctx, &detector);

        assert_eq!(plan.window.title, "other-window");
    }

    #[test]
    fn test_theme_error_messages_name_the_program() {
        let msg = failing_query().to_string();
        assert!(msg.contains("'reg'"), "got: {msg}");
    }
}
