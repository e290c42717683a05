//! End-to-end fetch behaviour against an in-memory paged comment source.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use yt_comments::app;
use yt_comments::extractor::api::{
    CommentSnippet, CommentThread, CommentThreadListResponse, CommentThreadSnippet,
    TopLevelComment, VideoItem, VideoListResponse, VideoSnippet, VideoStatistics,
};
use yt_comments::extractor::{CommentSource, CommentThreadsRequest};
use yt_comments::{resolve, AppError, CommentFetcher, FetchError, VideoId};

/// Pages of fixed size with opaque cursors, like the real endpoint
struct FakeYoutube {
    pages: Vec<Vec<CommentThread>>,
    has_video: bool,
    /// Page index answered with a remote error instead of items
    failing_page: Option<(usize, String)>,
    video_calls: AtomicUsize,
    page_calls: AtomicUsize,
}

impl FakeYoutube {
    fn with_comments(total: usize, page_size: usize) -> Self {
        let threads: Vec<CommentThread> = (0..total)
            .map(|n| thread(&format!("author {}", n), "2024-02-29T12:00:00Z"))
            .collect();
        Self::from_pages(threads.chunks(page_size).map(|c| c.to_vec()).collect())
    }

    fn from_pages(pages: Vec<Vec<CommentThread>>) -> Self {
        Self {
            pages,
            has_video: true,
            failing_page: None,
            video_calls: AtomicUsize::new(0),
            page_calls: AtomicUsize::new(0),
        }
    }

    fn page_calls(&self) -> usize {
        self.page_calls.load(Ordering::SeqCst)
    }
}

fn thread(author: &str, published_at: &str) -> CommentThread {
    CommentThread {
        snippet: CommentThreadSnippet {
            top_level_comment: TopLevelComment {
                snippet: CommentSnippet {
                    author_display_name: author.to_string(),
                    text_display: format!("text by {}", author),
                    like_count: 1,
                    published_at: published_at.to_string(),
                },
            },
            total_reply_count: 0,
        },
    }
}

fn cursor_for(page: usize) -> String {
    format!("CURSOR-{:04}", page)
}

#[async_trait]
impl CommentSource for FakeYoutube {
    fn id(&self) -> &'static str {
        "fake-youtube"
    }

    async fn list_videos(&self, video_id: &VideoId) -> Result<VideoListResponse, FetchError> {
        self.video_calls.fetch_add(1, Ordering::SeqCst);
        if !self.has_video {
            return Ok(VideoListResponse::default());
        }
        Ok(VideoListResponse {
            items: vec![VideoItem {
                id: video_id.to_string(),
                snippet: VideoSnippet {
                    title: "Fake video".to_string(),
                },
                statistics: VideoStatistics {
                    view_count: Some(10),
                    like_count: Some(2),
                    comment_count: None,
                },
            }],
        })
    }

    async fn list_comment_threads(
        &self,
        request: &CommentThreadsRequest,
    ) -> Result<CommentThreadListResponse, FetchError> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        let index = match request.page_token.as_deref() {
            None => 0,
            Some(token) => (0..self.pages.len())
                .find(|&i| cursor_for(i) == token)
                .ok_or_else(|| FetchError::Remote(format!("invalid page token {}", token)))?,
        };
        if let Some((page, message)) = &self.failing_page {
            if *page == index {
                return Err(FetchError::Remote(message.clone()));
            }
        }
        let items = self.pages.get(index).cloned().unwrap_or_default();
        let next_page_token = (index + 1 < self.pages.len()).then(|| cursor_for(index + 1));
        Ok(CommentThreadListResponse {
            items,
            next_page_token,
        })
    }
}

fn video() -> VideoId {
    resolve("https://www.youtube.com/watch?v=abc-123_XYZ").expect("resolvable")
}

#[tokio::test]
async fn returns_exactly_max_results_in_remote_order() {
    // 5 pages of 20; the fetcher asks for at most 20 per page
    let fetcher = CommentFetcher::new(FakeYoutube::with_comments(100, 20)).with_page_size_cap(20);
    let result = fetcher.fetch(&video(), 45).await.expect("fetch");

    assert_eq!(result.comments.len(), 45);
    for (n, comment) in result.comments.iter().enumerate() {
        assert_eq!(comment.author, format!("author {}", n));
    }
    // ceil(45 / 20) pages, no more
    assert_eq!(fetcher.source().page_calls(), 3);
}

#[tokio::test]
async fn fewer_comments_than_requested() {
    let fetcher = CommentFetcher::new(FakeYoutube::with_comments(12, 5));
    let result = fetcher.fetch(&video(), 500).await.expect("fetch");
    assert_eq!(result.comments.len(), 12);
    assert_eq!(fetcher.source().page_calls(), 3);
}

#[tokio::test]
async fn video_without_comments() {
    let fetcher = CommentFetcher::new(FakeYoutube::from_pages(vec![vec![]]));
    let result = fetcher.fetch(&video(), 10).await.expect("fetch");
    assert!(result.comments.is_empty());
    assert_eq!(result.metadata.title, "Fake video");
    assert_eq!(result.metadata.comment_count, None);
}

#[tokio::test]
async fn missing_video_issues_no_comment_requests() {
    let mut source = FakeYoutube::with_comments(10, 5);
    source.has_video = false;
    let fetcher = CommentFetcher::new(source);

    let err = fetcher.fetch(&video(), 10).await.unwrap_err();
    assert!(matches!(err, FetchError::VideoNotFound(_)));
    assert_eq!(fetcher.source().video_calls.load(Ordering::SeqCst), 1);
    assert_eq!(fetcher.source().page_calls(), 0);
}

#[tokio::test]
async fn malformed_timestamp_on_page_three_aborts() {
    let mut pages: Vec<Vec<CommentThread>> = (0..5)
        .map(|p| {
            (0..4)
                .map(|i| thread(&format!("p{}c{}", p, i), "2024-01-01T00:00:00Z"))
                .collect()
        })
        .collect();
    pages[2][1] = thread("bad", "2024-01-01 00:00:00");

    let fetcher = CommentFetcher::new(FakeYoutube::from_pages(pages));
    let err = fetcher.fetch(&video(), 20).await.unwrap_err();

    assert!(matches!(err, FetchError::MalformedTimestamp { .. }));
    assert_eq!(fetcher.source().page_calls(), 3);
}

#[tokio::test]
async fn remote_failure_is_surfaced_verbatim() {
    let message = "The request cannot be completed because you have exceeded your quota.";
    let mut source = FakeYoutube::with_comments(9, 3);
    source.failing_page = Some((1, message.to_string()));
    let fetcher = CommentFetcher::new(source).with_page_size_cap(3);

    let err = fetcher.fetch(&video(), 9).await.unwrap_err();

    match err {
        FetchError::Remote(m) => assert_eq!(m, message),
        other => panic!("unexpected error: {:?}", other),
    }
    // first page succeeded, second failed, nothing after
    assert_eq!(fetcher.source().page_calls(), 2);
}

#[tokio::test]
async fn repeated_fetches_are_identical() {
    let fetcher = CommentFetcher::new(FakeYoutube::with_comments(30, 7));
    let first = fetcher.fetch(&video(), 25).await.expect("first");
    let second = fetcher.fetch(&video(), 25).await.expect("second");
    assert_eq!(first, second);
}

#[tokio::test]
async fn fetch_from_url_resolves_every_shape() {
    let fetcher = CommentFetcher::new(FakeYoutube::with_comments(3, 3));
    for url in [
        "https://www.youtube.com/watch?v=abc-123_XYZ&t=1s",
        "https://youtu.be/abc-123_XYZ?si=x",
        "https://youtube.com/shorts/abc-123_XYZ/",
    ] {
        let result = app::fetch_from_url(&fetcher, url, 3).await.expect("fetch");
        assert_eq!(result.comments.len(), 3, "url: {}", url);
    }
}

#[tokio::test]
async fn fetch_from_url_rejects_unknown_url() {
    let fetcher = CommentFetcher::new(FakeYoutube::with_comments(3, 3));
    let err = app::fetch_from_url(&fetcher, "https://example.com/", 3)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidUrl(_)));
    assert_eq!(fetcher.source().video_calls.load(Ordering::SeqCst), 0);
}
