//! OS colour theme and the native window options derived from it.

use serde::Serialize;

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1024;
/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 768;

/// The OS colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Window background shown before the frontend paints: black for dark,
    /// white for light.
    ///
    /// Alpha is 255 on purpose.  An alpha of 1 leaves the window nearly
    /// transparent until the frontend's first paint.
    pub fn background(self) -> Rgba {
        match self {
            Self::Dark => Rgba::opaque(0, 0, 0),
            Self::Light => Rgba::opaque(255, 255, 255),
        }
    }
}

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Options the GUI host uses to open the main window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background: Rgba,
}

impl WindowOptions {
    /// Default-sized window titled `title` with the background for `theme`.
    pub fn for_theme(title: impl Into<String>, theme: Theme) -> Self {
        Self {
            title: title.into(),
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            background: theme.background(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_background_is_black() {
        assert_eq!(Theme::Dark.background(), Rgba::opaque(0, 0, 0));
    }

    #[test]
    fn test_light_theme_background_is_white() {
        assert_eq!(Theme::Light.background(), Rgba::opaque(255, 255, 255));
    }

    #[test]
    fn test_from_dark_mode_maps_flag_to_theme() {
        assert_eq!(Theme::from_dark_mode(true), Theme::Dark);
        assert_eq!(Theme::from_dark_mode(false), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }

    #[test]
    fn test_window_options_for_theme_uses_default_size() {
        // Arrange / Act
        let opts = WindowOptions::for_theme("twitch-notifications", Theme::Dark);

        // Assert
        assert_eq!(opts.title, "twitch-notifications");
        assert_eq!(opts.width, 1024);
        assert_eq!(opts.height, 768);
        assert_eq!(opts.background.a, 255);
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        let json = serde_json::to_string(&Theme::Dark).expect("serialize");
        assert_eq!(json, "\"dark\"");
    }
}
