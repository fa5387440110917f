//! Resolution of the per-user configuration root.
//!
//! | OS      | Root                                   |
//! |---------|----------------------------------------|
//! | Windows | `%APPDATA%` (Roaming AppData)          |
//! | Linux   | `$XDG_CONFIG_HOME` or `~/.config`      |
//! | macOS   | `~/Library/Application Support`        |
//!
//! The root is resolved on every call; nothing is cached.  A
//! [`FixedConfigRoot`] replaces the platform lookup for portable installs
//! (`--config-root`) and for tests.

use std::path::PathBuf;

/// Supplies the base directory the application subdirectory lives under.
pub trait ConfigRootProvider: Send + Sync {
    /// Returns the root, or `None` when the platform cannot supply one
    /// (e.g. `HOME` unset in a stripped container).
    fn config_root(&self) -> Option<PathBuf>;
}

/// Platform user config directory, via [`dirs::config_dir`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformConfigRoot;

impl ConfigRootProvider for PlatformConfigRoot {
    fn config_root(&self) -> Option<PathBuf> {
        dirs::config_dir()
    }
}

/// An explicit root that always resolves.
#[derive(Debug, Clone)]
pub struct FixedConfigRoot(pub PathBuf);

impl ConfigRootProvider for FixedConfigRoot {
    fn config_root(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

/// Picks a [`FixedConfigRoot`] when an override is given, otherwise the
/// platform root.
pub fn select_config_root(override_root: Option<PathBuf>) -> Box<dyn ConfigRootProvider> {
    match override_root {
        Some(root) => Box::new(FixedConfigRoot(root)),
        None => Box::new(PlatformConfigRoot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_root_always_resolves_to_given_path() {
        let provider = FixedConfigRoot(PathBuf::from("/tmp/tn-root"));
        assert_eq!(provider.config_root(), Some(PathBuf::from("/tmp/tn-root")));
    }

    #[test]
    fn test_select_config_root_prefers_override() {
        let provider = select_config_root(Some(PathBuf::from("/srv/portable")));
        assert_eq!(provider.config_root(), Some(PathBuf::from("/srv/portable")));
    }

    #[test]
    fn test_platform_root_resolves_when_home_is_available() {
        // Only asserted when the environment can actually supply a home
        // directory; stripped CI containers may not.
        #[cfg(target_os = "windows")]
        let home_available = std::env::var_os("APPDATA").is_some();
        #[cfg(not(target_os = "windows"))]
        let home_available = std::env::var_os("HOME").is_some();

        let result = PlatformConfigRoot.config_root();

        if home_available {
            assert!(result.is_some(), "config root must resolve when home is set");
        }
    }
}
