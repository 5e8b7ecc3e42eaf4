//! Configuration paths
//!
//! Uses the directories crate for platform-appropriate locations:
//! - Linux: `~/.config/reftest-debugger/`
//! - macOS: `~/Library/Application Support/reftest-debugger/`
//! - Windows: `%APPDATA%\reftest-debugger\`

use std::path::PathBuf;

/// Name of the application directory
const APP_NAME: &str = "reftest-debugger";

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
