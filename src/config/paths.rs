//! Cross-platform directory path resolution
//!
//! Provides functions to resolve platform-appropriate paths for the user
//! configuration file.
//! - Linux/macOS: XDG Base Directory specification (~/.config)
//! - Windows: Known Folder API (AppData\Roaming)

use std::path::PathBuf;

/// Get the configuration directory path
///
/// Checks WINDCFG_CONFIG_DIR environment variable first, then falls back to:
/// - Unix (Linux/macOS): XDG_CONFIG_HOME/windcfg or ~/.config/windcfg
/// - Windows: %APPDATA%\windcfg\config
pub fn config_dir() -> PathBuf {
    std::env::var("WINDCFG_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            #[cfg(windows)]
            {
                // On Windows, use ProjectDirs for proper AppData paths
                use directories::ProjectDirs;
                ProjectDirs::from("", "", "windcfg")
                    .map(|dirs| dirs.config_dir().to_path_buf())
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join("windcfg"))
            }
            #[cfg(not(windows))]
            {
                // On Unix (Linux/macOS), use XDG_CONFIG_HOME or $HOME/.config
                use directories::BaseDirs;
                std::env::var("XDG_CONFIG_HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| {
                        BaseDirs::new()
                            .map(|dirs| dirs.home_dir().join(".config"))
                            .unwrap_or_else(|| PathBuf::from(".").join(".config"))
                    })
                    .join("windcfg")
            }
        })
}

/// Get the user configuration file path
pub fn user_config_path() -> PathBuf {
    config_dir().join("windcfg.yaml")
}
