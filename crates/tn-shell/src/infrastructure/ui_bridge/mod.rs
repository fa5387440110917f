//! Command bridge: exposes the shell's operations to the web frontend.
//!
//! The GUI host routes frontend calls to the functions in this module and
//! serialises their return values to JSON:
//!
//! ```ts
//! const check = await invoke<FileCheckResult>('check_config_file');
//! const text  = await invoke<CommandResult<string>>('check_and_read_file');
//! ```
//!
//! Every handler runs synchronously on the caller's thread.  [`AppState`] is
//! immutable after construction, so handlers need no locking and may run
//! concurrently; the only ordering is whatever the file system provides.
//!
//! # `CommandResult<T>` wrapper
//!
//! Commands that can fail return `CommandResult<T>` so every response has
//! the same shape: `{ success: bool, data: T | null, error: string | null }`.
//! `check_config_file` is the exception: its [`FileCheckResult`] already
//! carries the error fields the frontend expects.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use tn_core::{AppContext, FileCheckResult, Rgba, Theme};

use crate::application::startup::{plan_startup, StartupPlan, ThemeDetector};
use crate::infrastructure::storage::{config_file::ConfigFileManager, config_root::ConfigRootProvider};

// ── Shared application state ──────────────────────────────────────────────────

/// State shared by every command handler.
///
/// Built once at startup from the [`AppContext`] and never mutated.
pub struct AppState {
    pub context: AppContext,
    pub config_files: ConfigFileManager,
    pub theme_detector: Box<dyn ThemeDetector + Send + Sync>,
}

impl AppState {
    pub fn new(
        context: AppContext,
        config_root: Box<dyn ConfigRootProvider>,
        theme_detector: Box<dyn ThemeDetector + Send + Sync>,
    ) -> Arc<Self> {
        Arc::new(Self {
            config_files: ConfigFileManager::new(context.clone(), config_root),
            context,
            theme_detector,
        })
    }
}

// ── Data Transfer Objects ─────────────────────────────────────────────────────

/// The OS theme as reported to the frontend.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDto {
    pub dark_mode: bool,
    pub background: Rgba,
}

impl From<Theme> for ThemeDto {
    fn from(theme: Theme) -> Self {
        Self {
            dark_mode: theme.is_dark(),
            background: theme.background(),
        }
    }
}

/// Unified response wrapper used by fallible commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResult<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// Read-only check of the config directory and file.
pub fn check_config_file(state: &AppState) -> FileCheckResult {
    state.config_files.check_config_file()
}

/// Creates the config directory if needed, then returns the file text or
/// `"File does not exist"`.
pub fn check_and_read_file(state: &AppState) -> CommandResult<String> {
    match state.config_files.check_and_read_file() {
        Ok(read) => CommandResult::ok(read.into_text()),
        Err(e) => {
            warn!("check_and_read_file failed: {e}");
            CommandResult::err(e.to_string())
        }
    }
}

/// Queries the OS theme.
pub fn detect_theme(state: &AppState) -> CommandResult<ThemeDto> {
    match state.theme_detector.detect_dark_mode() {
        Ok(dark_mode) => CommandResult::ok(Theme::from_dark_mode(dark_mode).into()),
        Err(e) => CommandResult::err(format!("failed to detect dark mode: {e}")),
    }
}

/// Window options for the GUI host, computed from the current OS theme.
pub fn startup_plan(state: &AppState) -> StartupPlan {
    plan_startup(&state.context, state.theme_detector.as_ref())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
