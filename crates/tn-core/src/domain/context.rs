//! Application context created once at startup.
//!
//! The shell never mutates the context after construction.  Every component
//! that needs the application title receives the context (or a clone of it)
//! when it is built, instead of reading a global.

/// Default application title.  Also the name of the per-user config directory.
pub const DEFAULT_APP_TITLE: &str = "Twitch Notifications";

/// Default native window title.
pub const DEFAULT_WINDOW_TITLE: &str = "twitch-notifications";

/// Immutable startup context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    app_title: String,
    window_title: String,
}

impl AppContext {
    /// Creates a context with a custom application title and the default
    /// window title.
    pub fn new(app_title: impl Into<String>) -> Self {
        Self {
            app_title: app_title.into(),
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }

    /// Replaces the window title.  Consumes `self`, so it can only be used
    /// while the context is still being built.
    pub fn with_window_title(mut self, window_title: impl Into<String>) -> Self {
        self.window_title = window_title.into();
        self
    }

    /// Name of the application subdirectory under the user config root.
    pub fn app_title(&self) -> &str {
        &self.app_title
    }

    /// Title of the native window.
    pub fn window_title(&self) -> &str {
        &self.window_title
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(DEFAULT_APP_TITLE)
    }
}
