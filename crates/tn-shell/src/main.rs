//! Twitch Notifications shell: entry point.
//!
//! Headless host for the shell commands.  A GUI host calls the same
//! functions in `infrastructure::ui_bridge`; this binary prints their JSON
//! results to stdout so they can be scripted and inspected.
//!
//! # Usage
//!
//! ```text
//! tn-shell [OPTIONS] [COMMAND]
//!
//! Commands:
//!   startup       Print the window options for the current OS theme (default)
//!   check-config  Read-only config check, printed as FileCheckResult JSON
//!   read-config   Create the config directory if needed and print the file
//!   theme         Print the detected OS theme
//!
//! Options:
//!   --app-title   <TITLE>  Config directory name [default: Twitch Notifications]
//!   --config-root <DIR>    Use DIR instead of the platform config root
//!   --theme       <MODE>   auto | dark | light [default: auto]
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable         | Default                | Description              |
//! |------------------|------------------------|--------------------------|
//! | `TN_APP_TITLE`   | `Twitch Notifications` | Config directory name    |
//! | `TN_CONFIG_ROOT` | platform config root   | Config root override     |
//! | `TN_THEME`       | `auto`                 | Theme override           |
//! | `RUST_LOG`       | `info`                 | Log filter (stderr)      |

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tn_core::domain::context::DEFAULT_APP_TITLE;
use tn_core::AppContext;
use tn_shell::application::startup::ThemeDetector;
use tn_shell::infrastructure::storage::config_root::select_config_root;
use tn_shell::infrastructure::theme::{NativeThemeDetector, StaticThemeDetector};
use tn_shell::infrastructure::ui_bridge::{self, AppState};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Twitch Notifications desktop shell.
#[derive(Debug, Parser)]
#[command(
    name = "tn-shell",
    about = "Config file checks and OS theme detection for the Twitch Notifications frontend",
    version
)]
struct Cli {
    /// Name of the application directory under the config root.
    #[arg(long, default_value = DEFAULT_APP_TITLE, env = "TN_APP_TITLE")]
    app_title: String,

    /// Config root to use instead of the platform user config directory.
    #[arg(long, env = "TN_CONFIG_ROOT")]
    config_root: Option<PathBuf>,

    /// Skip OS detection and force a theme.
    #[arg(long, value_enum, default_value_t = ThemeMode::Auto, env = "TN_THEME")]
    theme: ThemeMode,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeMode {
    Auto,
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Command {
    /// Print the window options for the current OS theme.
    Startup,
    /// Read-only config check.
    CheckConfig,
    /// Create the config directory if needed and print the config file.
    ReadConfig,
    /// Print the detected OS theme.
    Theme,
}

impl Cli {
    fn theme_detector(&self) -> Box<dyn ThemeDetector + Send + Sync> {
        match self.theme {
            ThemeMode::Auto => Box::new(NativeThemeDetector::default()),
            ThemeMode::Dark => Box::new(StaticThemeDetector { dark_mode: true }),
            ThemeMode::Light => Box::new(StaticThemeDetector { dark_mode: false }),
        }
    }

    fn into_app_state(self) -> std::sync::Arc<AppState> {
        let detector = self.theme_detector();
        AppState::new(
            AppContext::new(self.app_title),
            select_config_root(self.config_root),
            detector,
        )
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Startup);
    let state = cli.into_app_state();

    info!(app_title = state.context.app_title(), ?command, "Twitch Notifications shell");

    match command {
        Command::Startup => print_json(&ui_bridge::startup_plan(&state)),
        Command::CheckConfig => print_json(&ui_bridge::check_config_file(&state)),
        Command::Theme => print_json(&ui_bridge::detect_theme(&state)),
        Command::ReadConfig => {
            let result = ui_bridge::check_and_read_file(&state);
            match (result.data, result.error) {
                (Some(text), _) => write_config_text(&mut std::io::stdout().lock(), &text),
                (None, error) => Err(anyhow::anyhow!(
                    "failed to read configuration: {}",
                    error.unwrap_or_default()
                )),
            }
        }
    }
}

/// Config content goes out byte for byte, no trailing newline.
fn write_config_text<W: Write>(out: &mut W, text: &str) -> anyhow::Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .context("failed to write configuration to stdout")
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        // Arrange: parse with no arguments (all defaults apply)
        let cli = Cli::try_parse_from(["tn-shell"]).expect("parse");

        // Assert
        assert_eq!(cli.theme, ThemeMode::Auto);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_app_title_override() {
        let cli = Cli::parse_from(["tn-shell", "--app-title", "Other App"]);
        assert_eq!(cli.app_title, "Other App");
    }

    #[test]
    fn test_cli_config_root_override() {
        let cli = Cli::parse_from(["tn-shell", "--config-root", "/srv/portable"]);
        assert_eq!(cli.config_root, Some(PathBuf::from("/srv/portable")));
    }

    #[test]
    fn test_cli_subcommands_parse() {
        let cli = Cli::parse_from(["tn-shell", "check-config"]);
        assert_eq!(cli.command, Some(Command::CheckConfig));

        let cli = Cli::parse_from(["tn-shell", "read-config"]);
        assert_eq!(cli.command, Some(Command::ReadConfig));

        let cli = Cli::parse_from(["tn-shell", "--theme", "dark", "theme"]);
        assert_eq!(cli.command, Some(Command::Theme));
        assert_eq!(cli.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_cli_rejects_unknown_theme() {
        let result = Cli::try_parse_from(["tn-shell", "--theme", "sepia"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_forced_dark_theme_uses_static_detector() {
        let cli = Cli::parse_from(["tn-shell", "--theme", "dark"]);
        let detector = cli.theme_detector();
        assert!(detector.detect_dark_mode().expect("detect"));
    }

    #[test]
    fn test_write_config_text_adds_no_trailing_newline() {
        let mut out = Vec::new();

        write_config_text(&mut out, "{\"channel\":\"x\"}").expect("write");

        assert_eq!(out, b"{\"channel\":\"x\"}");
    }

    #[test]
    fn test_write_config_text_keeps_sentinel_verbatim() {
        let mut out = Vec::new();

        write_config_text(&mut out, tn_core::FILE_DOES_NOT_EXIST).expect("write");

        assert_eq!(out, b"File does not exist");
    }

    #[test]
    fn test_into_app_state_uses_app_title_and_config_root() {
        // Arrange
        let root = tempfile::tempdir().expect("tempdir");
        let cli = Cli::parse_from([
            "tn-shell",
            "--app-title",
            "CLI Test",
            "--config-root",
            root.path().to_str().expect("utf-8 temp path"),
        ]);

        // Act
        let state = cli.into_app_state();
        let location = state.config_files.location().expect("location");

        // Assert
        assert_eq!(state.context.app_title(), "CLI Test");
        assert_eq!(location.app_directory(), root.path().join("CLI Test"));
    }
}
