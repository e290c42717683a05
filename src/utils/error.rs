//! Error handling for yt-comments

use crate::extractor::VideoId;
use thiserror::Error;

/// Failure of a comment fetch.
///
/// Remote faults (transport, authentication, quota, unexpected payloads)
/// are not classified further: they carry the underlying message verbatim.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Video not found: {0}")]
    VideoNotFound(VideoId),

    #[error("Malformed comment timestamp {value:?}: {source}")]
    MalformedTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("{0}")]
    Remote(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Remote(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Remote(format!("Unexpected response: {}", err))
    }
}

/// Application-level error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}
