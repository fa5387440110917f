//! Config file location and the result record returned to the frontend.
//!
//! The config file lives at:
//!
//! ```text
//! <user config root>/<application title>/config.json
//! ```
//!
//! - Windows:  `%APPDATA%\Twitch Notifications\config.json`
//! - Linux:    `~/.config/Twitch Notifications/config.json`
//! - macOS:    `~/Library/Application Support/Twitch Notifications/config.json`
//!
//! The file's content is opaque to the shell: it is handed to the frontend
//! as raw text.
//!
//! # FileCheckResult wire shape
//!
//! The frontend receives a JSON object with exactly these keys:
//!
//! ```json
//! { "exists": false, "content": "", "error": "Configuration file missing", "errorType": "file" }
//! ```
//!
//! `errorType` is `"directory"`, `"file"`, or `""` when nothing went wrong.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Name of the config file inside the application directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Returned in place of file content when the config file does not exist yet.
pub const FILE_DOES_NOT_EXIST: &str = "File does not exist";

/// The pair of paths that locate the config file.
///
/// Derived on every call from the config root and the application title;
/// never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    app_directory: PathBuf,
    config_file: PathBuf,
}

impl ConfigLocation {
    /// Builds the location for `app_title` under the given config root.
    pub fn under(config_root: &Path, app_title: &str) -> Self {
        let app_directory = config_root.join(app_title);
        let config_file = app_directory.join(CONFIG_FILE_NAME);
        Self {
            app_directory,
            config_file,
        }
    }

    /// `<config root>/<application title>`
    pub fn app_directory(&self) -> &Path {
        &self.app_directory
    }

    /// `<config root>/<application title>/config.json`
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }
}

/// Which part of the location a failed check is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// The config root could not be resolved or the application directory is missing.
    #[serde(rename = "directory")]
    Directory,
    /// The directory exists but the file lookup or read failed.
    #[serde(rename = "file")]
    File,
    /// No error.
    #[serde(rename = "")]
    None,
}

/// Every way a config check can fail.
///
/// Each failure maps to a fixed [`ErrorKind`] and a fixed frontend message.
/// The underlying I/O error is deliberately not forwarded to the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckFailure {
    /// The platform could not supply a user config root.
    ConfigRootUnavailable,
    /// `<root>/<title>` does not exist.
    DirectoryMissing,
    /// `config.json` does not exist.
    FileMissing,
    /// Probing `config.json` failed for a reason other than "not found".
    FileAccess,
    /// `config.json` exists but could not be read.
    FileRead,
    /// `config.json` exists but is not a regular file.
    Unknown,
}

impl CheckFailure {
    /// The [`ErrorKind`] reported to the frontend.
    pub fn kind(self) -> ErrorKind {
        match self {
            Self::ConfigRootUnavailable | Self::DirectoryMissing => ErrorKind::Directory,
            Self::FileMissing | Self::FileAccess | Self::FileRead | Self::Unknown => {
                ErrorKind::File
            }
        }
    }

    /// The message shown by the frontend.
    pub fn message(self) -> &'static str {
        match self {
            Self::ConfigRootUnavailable => "Failed to get config directory",
            Self::DirectoryMissing => "Configuration directory missing",
            Self::FileMissing => "Configuration file missing",
            Self::FileAccess => "Error accessing file",
            Self::FileRead => "Failed to read file",
            Self::Unknown => "Unknown error occurred",
        }
    }
}

/// Outcome of a read-only config check.
///
/// Only constructible through [`FileCheckResult::found`] and
/// [`FileCheckResult::failed`], which keeps `exists == true` paired with an
/// empty error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileCheckResult {
    exists: bool,
    content: String,
    error: String,
    #[serde(rename = "errorType")]
    error_kind: ErrorKind,
}

impl FileCheckResult {
    /// The file exists and was read in full.
    pub fn found(content: impl Into<String>) -> Self {
        Self {
            exists: true,
            content: content.into(),
            error: String::new(),
            error_kind: ErrorKind::None,
        }
    }

    /// The check stopped at `failure`.
    pub fn failed(failure: CheckFailure) -> Self {
        Self {
            exists: false,
            content: String::new(),
            error: failure.message().to_string(),
            error_kind: failure.kind(),
        }
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Frontend error message, empty on success.
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn error_kind(&self) -> ErrorKind {
        self.error_kind
    }
}
