//! Utility modules for error handling, configuration and paths

pub mod config;
pub mod error;
pub mod paths;

// Re-export for convenience
pub use config::AppSettings;
pub use error::{AppError, FetchError};
pub use paths::{get_config_dir, get_downloads_dir, get_export_file_path, get_settings_path};
