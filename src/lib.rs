//! yt-comments library
//!
//! Resolve a video URL to its identifier and fetch the video's top-level
//! comments through the paginated YouTube Data API.

pub mod app;
pub mod display;
pub mod export;
pub mod extractor;
pub mod utils;

// Re-export main types for easier use
pub use export::{CommentRow, ExportFormat};
pub use extractor::{
    resolve, CommentFetcher, CommentRecord, CommentSource, FetchResult, VideoId, VideoMetadata,
    YoutubeDataApi,
};
pub use utils::{AppError, AppSettings, FetchError};
