//! Platform path resolution
//!
//! Paths are always absolute so the binary behaves the same no matter which
//! directory it was launched from.

use std::path::PathBuf;
use tracing::{debug, warn};

const APP_DIR: &str = "yt-comments";

/// Get the configuration directory.
///
/// Returns: `<config_dir>/yt-comments/` (e.g. `~/.config/yt-comments/` on Linux)
pub fn get_config_dir() -> PathBuf {
    let dir = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| {
            warn!("Could not determine config directory, using temp dir");
            std::env::temp_dir()
        })
        .join(APP_DIR);

    debug!("Config directory: {:?}", dir);
    dir
}

/// Returns: `<config_dir>/yt-comments/settings.json`
pub fn get_settings_path() -> PathBuf {
    get_config_dir().join("settings.json")
}

/// Get the downloads directory, falling back to `~/Downloads` and then the temp dir.
pub fn get_downloads_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| {
            warn!("Could not determine Downloads directory, using temp dir");
            std::env::temp_dir()
        })
}

/// Returns: `<downloads>/{filename}`
pub fn get_export_file_path(filename: &str) -> PathBuf {
    get_downloads_dir().join(filename)
}
