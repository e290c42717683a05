//! Application configuration

use crate::extractor::TextFormat;
use crate::export::ExportFormat;
use crate::utils::error::AppError;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tracing::{debug, info};

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// YouTube Data API key
    pub api_key: Option<String>,

    /// Base URL of the Data API
    pub api_base_url: String,

    /// Comments fetched when the caller does not say otherwise
    pub max_comments: usize,

    /// Ceiling enforced on user-supplied counts
    pub max_comments_limit: usize,

    /// Largest page the platform serves for comment threads
    pub page_size_cap: u32,

    /// Per-request timeout (seconds)
    pub request_timeout_secs: u64,

    /// Comment text encoding requested from the API
    pub text_format: TextFormat,

    /// Default export encoding
    pub export_format: ExportFormat,

    pub user_agent: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: "https://www.googleapis.com/youtube/v3".to_string(),
            max_comments: 100,
            max_comments_limit: 500,
            page_size_cap: 100,
            request_timeout_secs: 30,
            text_format: TextFormat::PlainText,
            export_format: ExportFormat::Csv,
            user_agent: concat!("yt-comments/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl AppSettings {
    /// Load settings from a JSON file, falling back to defaults when it is absent
    pub async fn load_from(path: &Path) -> Result<Self, AppError> {
        let json = match fs::read_to_string(path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No settings file at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let settings: AppSettings = serde_json::from_str(&json)?;
        info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Defaults, then the settings file, then the environment
    pub async fn load() -> Result<Self, AppError> {
        let mut settings = Self::load_from(&crate::utils::paths::get_settings_path()).await?;
        settings.apply_env();
        Ok(settings)
    }

    /// Override the API key from `YOUTUBE_API_KEY` when it is set
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.api_key = Some(key);
            }
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Reject settings the fetcher cannot work with
    pub fn validate(&self) -> Result<(), AppError> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => {}
            _ => {
                return Err(AppError::Config(format!(
                    "missing API key (set {} or pass --api-key)",
                    API_KEY_ENV
                )))
            }
        }
        if self.api_base_url.trim().is_empty() {
            return Err(AppError::Config("api_base_url must not be empty".into()));
        }
        if self.max_comments_limit == 0 {
            return Err(AppError::Config("max_comments_limit must be positive".into()));
        }
        self.check_max_comments(self.max_comments)?;
        if self.page_size_cap == 0 {
            return Err(AppError::Config("page_size_cap must be positive".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(AppError::Config("request_timeout_secs must be positive".into()));
        }
        Ok(())
    }

    /// Check a requested comment count against the configured ceiling
    pub fn check_max_comments(&self, requested: usize) -> Result<usize, AppError> {
        if requested == 0 || requested > self.max_comments_limit {
            return Err(AppError::Config(format!(
                "maximum comments must be between 1 and {}, got {}",
                self.max_comments_limit, requested
            )));
        }
        Ok(requested)
    }
}
