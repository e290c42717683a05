//! Paginated comment retrieval
//!
//! One metadata lookup, then a strictly sequential chain of comment-thread
//! pages. Each page request needs the cursor of the previous response, so
//! nothing here runs concurrently. The result is bounded by `max_results`
//! even when the last page overshoots.

use crate::extractor::api::{CommentThread, VideoListResponse};
use crate::extractor::models::{CommentRecord, FetchResult, TextFormat, VideoId, VideoMetadata};
use crate::extractor::traits::{CommentSource, CommentThreadsRequest};
use crate::utils::error::FetchError;
use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::debug;

/// Timestamp layout used by the platform
const PUBLISHED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Largest page `commentThreads.list` serves
pub const DEFAULT_PAGE_SIZE_CAP: u32 = 100;

/// Pagination state
#[derive(Debug, Clone, PartialEq, Eq)]
enum PageState {
    /// Next request carries this cursor (`None` for the first page)
    Fetching { cursor: Option<String> },
    Done,
}

/// Drives the remote list protocol for one video at a time
pub struct CommentFetcher<S> {
    source: S,
    page_size_cap: u32,
    text_format: TextFormat,
}

impl<S: CommentSource> CommentFetcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            page_size_cap: DEFAULT_PAGE_SIZE_CAP,
            text_format: TextFormat::default(),
        }
    }

    /// Upper bound for the page size hint (values below 1 are raised to 1)
    pub fn with_page_size_cap(mut self, cap: u32) -> Self {
        self.page_size_cap = cap.max(1);
        self
    }

    pub fn with_text_format(mut self, text_format: TextFormat) -> Self {
        self.text_format = text_format;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch metadata and up to `max_results` top-level comments.
    ///
    /// Either the whole result is produced or nothing is: a single bad
    /// timestamp on any page fails the fetch.
    pub async fn fetch(&self, id: &VideoId, max_results: usize) -> Result<FetchResult, FetchError> {
        let metadata = self.fetch_metadata(id).await?;

        let mut comments: Vec<CommentRecord> = Vec::with_capacity(max_results.min(1024));
        let mut state = if max_results == 0 {
            PageState::Done
        } else {
            PageState::Fetching { cursor: None }
        };
        let mut pages = 0usize;

        while let PageState::Fetching { cursor } = state {
            let request = CommentThreadsRequest {
                video_id: id.clone(),
                page_size: self.page_size_hint(max_results - comments.len()),
                page_token: cursor,
                text_format: self.text_format,
            };
            debug!(
                "Requesting comment page {} for {} (page_size={}, collected={})",
                pages + 1,
                id,
                request.page_size,
                comments.len()
            );

            let page = self.source.list_comment_threads(&request).await?;
            pages += 1;

            for thread in &page.items {
                comments.push(shape_comment(thread)?);
            }

            state = next_state(page.next_page_token, comments.len(), max_results);
        }

        // The last page may have overshot the bound
        comments.truncate(max_results);

        debug!(
            "Fetched {} comments for {} in {} page(s) via {}",
            comments.len(),
            id,
            pages,
            self.source.id()
        );

        Ok(FetchResult { metadata, comments })
    }

    async fn fetch_metadata(&self, id: &VideoId) -> Result<VideoMetadata, FetchError> {
        let response = self.source.list_videos(id).await?;
        shape_metadata(id, response)
    }

    fn page_size_hint(&self, remaining: usize) -> u32 {
        u32::try_from(remaining)
            .unwrap_or(u32::MAX)
            .clamp(1, self.page_size_cap)
    }
}

/// Continue only while a cursor exists and the quota is not yet met
fn next_state(cursor: Option<String>, collected: usize, max_results: usize) -> PageState {
    match cursor {
        Some(cursor) if collected < max_results => PageState::Fetching {
            cursor: Some(cursor),
        },
        _ => PageState::Done,
    }
}

fn shape_metadata(id: &VideoId, response: VideoListResponse) -> Result<VideoMetadata, FetchError> {
    let item = response
        .items
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::VideoNotFound(id.clone()))?;

    Ok(VideoMetadata {
        title: item.snippet.title,
        view_count: item.statistics.view_count,
        like_count: item.statistics.like_count,
        comment_count: item.statistics.comment_count,
    })
}

fn shape_comment(thread: &CommentThread) -> Result<CommentRecord, FetchError> {
    let comment = &thread.snippet.top_level_comment.snippet;
    Ok(CommentRecord {
        author: comment.author_display_name.clone(),
        text: comment.text_display.clone(),
        like_count: comment.like_count,
        published_at: parse_published_at(&comment.published_at)?,
        reply_count: thread.snippet.total_reply_count,
    })
}

/// Parse `YYYY-MM-DDTHH:MM:SSZ` as a UTC instant
pub fn parse_published_at(value: &str) -> Result<DateTime<Utc>, FetchError> {
    NaiveDateTime::parse_from_str(value, PUBLISHED_AT_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| FetchError::MalformedTimestamp {
            value: value.to_string(),
            source,
        })
}
