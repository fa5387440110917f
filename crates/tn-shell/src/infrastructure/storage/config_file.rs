//! Config file checks exposed to the frontend.
//!
//! [`ConfigFileManager`] answers two questions about
//! `<config root>/<application title>/config.json`:
//!
//! - [`ConfigFileManager::check_config_file`] – read-only.  Reports which part
//!   of the path is missing, or the file content, as a [`FileCheckResult`].
//!   Never touches the disk beyond `stat` and `read`.
//!
//! - [`ConfigFileManager::check_and_read_file`] – creates the application
//!   directory if it is missing, then reads the file.  A missing file is not
//!   an error: it yields [`ConfigRead::FileMissing`].
//!
//! Both operations resolve the paths again on every call and keep no state
//! between calls.  Failures are returned immediately; nothing is retried.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use tn_core::{AppContext, CheckFailure, ConfigLocation, FileCheckResult, FILE_DOES_NOT_EXIST};

use super::config_root::ConfigRootProvider;

/// Error type for [`ConfigFileManager::check_and_read_file`].
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// The platform config directory could not be determined.
    #[error("failed to get config folder")]
    ConfigRootUnavailable,

    /// The application directory did not exist and could not be created.
    #[error("failed to create folder {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file exists but could not be read.
    #[error("failed to read file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Successful outcome of [`ConfigFileManager::check_and_read_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigRead {
    /// Full text of `config.json`.
    Contents(String),
    /// `config.json` does not exist yet.
    FileMissing,
}

impl ConfigRead {
    /// Frontend representation: the file text, or the
    /// [`FILE_DOES_NOT_EXIST`] sentinel.
    pub fn into_text(self) -> String {
        match self {
            Self::Contents(text) => text,
            Self::FileMissing => FILE_DOES_NOT_EXIST.to_string(),
        }
    }
}

/// Checks, creates and reads the per-user config file.
pub struct ConfigFileManager {
    context: AppContext,
    roots: Box<dyn ConfigRootProvider>,
}

impl ConfigFileManager {
    pub fn new(context: AppContext, roots: Box<dyn ConfigRootProvider>) -> Self {
        Self { context, roots }
    }

    /// Resolves the config location, or `None` if the platform has no
    /// config root.
    pub fn location(&self) -> Option<ConfigLocation> {
        self.roots
            .config_root()
            .map(|root| ConfigLocation::under(&root, self.context.app_title()))
    }

    /// Read-only check of the application directory and config file.
    ///
    /// Only "not found" on the directory stops the check early; any other
    /// directory lookup error falls through to the file lookup, which then
    /// reports the problem as a file error.
    pub fn check_config_file(&self) -> FileCheckResult {
        let Some(location) = self.location() else {
            warn!("platform config directory unavailable");
            return FileCheckResult::failed(CheckFailure::ConfigRootUnavailable);
        };

        if is_missing(location.app_directory()) {
            debug!(dir = %location.app_directory().display(), "config directory missing");
            return FileCheckResult::failed(CheckFailure::DirectoryMissing);
        }

        let metadata = match fs::metadata(location.config_file()) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(file = %location.config_file().display(), "config file missing");
                return FileCheckResult::failed(CheckFailure::FileMissing);
            }
            Err(e) => {
                warn!(file = %location.config_file().display(), "error accessing config file: {e}");
                return FileCheckResult::failed(CheckFailure::FileAccess);
            }
        };

        if metadata.is_dir() {
            warn!(file = %location.config_file().display(), "config path is a directory");
            return FileCheckResult::failed(CheckFailure::Unknown);
        }

        match read_text(location.config_file()) {
            Ok(content) => FileCheckResult::found(content),
            Err(e) => {
                warn!(file = %location.config_file().display(), "failed to read config file: {e}");
                FileCheckResult::failed(CheckFailure::FileRead)
            }
        }
    }

    /// Ensures the application directory exists, then reads the config file.
    ///
    /// # Errors
    ///
    /// - [`ConfigFileError::ConfigRootUnavailable`] if no config root resolves.
    /// - [`ConfigFileError::CreateDirectory`] if the missing directory cannot
    ///   be created.
    /// - [`ConfigFileError::Read`] if the file exists but cannot be read.
    pub fn check_and_read_file(&self) -> Result<ConfigRead, ConfigFileError> {
        let location = self
            .location()
            .ok_or(ConfigFileError::ConfigRootUnavailable)?;
        let dir = location.app_directory();

        if is_missing(dir) {
            create_app_directory(dir).map_err(|source| ConfigFileError::CreateDirectory {
                path: dir.to_path_buf(),
                source,
            })?;
            info!(dir = %dir.display(), "folder created");
        }

        let file = location.config_file();
        if is_missing(file) {
            info!(file = %file.display(), "file does not exist");
            return Ok(ConfigRead::FileMissing);
        }

        let content = read_text(file).map_err(|source| ConfigFileError::Read {
            path: file.to_path_buf(),
            source,
        })?;

        info!(file = %file.display(), "file read successfully");
        Ok(ConfigRead::Contents(content))
    }
}

fn is_missing(path: &Path) -> bool {
    matches!(fs::metadata(path), Err(e) if e.kind() == io::ErrorKind::NotFound)
}

/// Reads the whole file.  Invalid UTF-8 is replaced rather than rejected:
/// the content is opaque to the shell and the frontend decides what to do
/// with it.
fn read_text(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// `mkdir -p` with mode 0755 on Unix.  Succeeds if the directory exists.
fn create_app_directory(path: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(path)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
