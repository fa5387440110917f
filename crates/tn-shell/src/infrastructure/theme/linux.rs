//! Linux dark-mode detection.
//!
//! There is no single desktop-wide setting on Linux, so several hints are
//! tried in order and the first one that says "dark" wins:
//!
//! 1. `GTK_THEME` environment variable (e.g. `Adwaita:dark`).
//! 2. `gsettings get org.gnome.desktop.interface gtk-theme` (GNOME).
//! 3. The `kdeglobals` file in the user config directory (KDE).
//! 4. `COLORFGBG` set by some terminal emulators.
//!
//! Missing programs or files are skipped.  Detection never fails; when no
//! hint matches the answer is light.

use std::env;
use std::fs;

use tracing::debug;

use super::{parse, run_query};
use crate::application::startup::{ThemeDetector, ThemeError};

/// Linux implementation of [`ThemeDetector`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxThemeDetector;

impl ThemeDetector for LinuxThemeDetector {
    fn detect_dark_mode(&self) -> Result<bool, ThemeError> {
        Ok(detect())
    }
}

fn detect() -> bool {
    if env::var("GTK_THEME").is_ok_and(|theme| parse::mentions_dark(&theme)) {
        debug!("dark mode from GTK_THEME");
        return true;
    }

    match run_query("gsettings", &["get", "org.gnome.desktop.interface", "gtk-theme"]) {
        Ok(theme) if parse::mentions_dark(&theme) => {
            debug!("dark mode from gsettings");
            return true;
        }
        Ok(_) => {}
        Err(e) => debug!("gsettings query skipped: {e}"),
    }

    let kdeglobals = dirs::config_dir().map(|dir| dir.join("kdeglobals"));
    if let Some(path) = kdeglobals {
        if fs::read_to_string(&path).is_ok_and(|content| parse::mentions_dark(&content)) {
            debug!(path = %path.display(), "dark mode from kdeglobals");
            return true;
        }
    }

    env::var("COLORFGBG").is_ok_and(|value| parse::colorfgbg_is_dark(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linux_detector_never_errors() {
        let result = LinuxThemeDetector.detect_dark_mode();
        assert!(result.is_ok(), "linux detection must not fail: {result:?}");
    }
}
