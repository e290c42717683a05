use crate::extractor::api::{CommentThreadListResponse, VideoListResponse};
use crate::extractor::models::{TextFormat, VideoId};
use crate::utils::error::FetchError;
use async_trait::async_trait;

/// One `commentThreads.list` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentThreadsRequest {
    pub video_id: VideoId,
    /// Hint only: the platform may return fewer (or more) items
    pub page_size: u32,
    pub page_token: Option<String>,
    pub text_format: TextFormat,
}

/// Remote API seam used by the fetcher
///
/// This trait isolates the pagination logic from the transport, so the
/// production HTTP client and in-memory fakes are interchangeable.
#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Returns a unique identifier for this source (e.g., "youtube-data-api")
    fn id(&self) -> &'static str;

    /// Looks up title and statistics of a video
    async fn list_videos(&self, video_id: &VideoId) -> Result<VideoListResponse, FetchError>;

    /// Fetches one page of top-level comment threads
    async fn list_comment_threads(
        &self,
        request: &CommentThreadsRequest,
    ) -> Result<CommentThreadListResponse, FetchError>;
}
