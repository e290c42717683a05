//! Console rendering of a fetch result

use crate::extractor::{CommentRecord, FetchResult, VideoMetadata};
use std::fmt::Write;

const DIVIDER: &str = "------------------------------------------------------------";

/// Counter value or `N/A` when the platform did not report it
pub fn count_or_na(count: Option<u64>) -> String {
    count.map_or_else(|| "N/A".to_string(), |c| c.to_string())
}

pub fn render_summary(metadata: &VideoMetadata) -> String {
    format!(
        "{}\nViews: {}  |  Likes: {}  |  Comments: {}",
        metadata.title,
        count_or_na(metadata.view_count),
        count_or_na(metadata.like_count),
        count_or_na(metadata.comment_count)
    )
}

pub fn render_comment(comment: &CommentRecord) -> String {
    format!(
        "{}\n{}\nPosted: {}  |  Likes: {}  |  Replies: {}",
        comment.author,
        comment.text,
        comment.published_at.format("%Y-%m-%d %H:%M"),
        comment.like_count,
        comment.reply_count
    )
}

/// Title, statistics and (optionally) every comment
pub fn render(result: &FetchResult, with_comments: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", render_summary(&result.metadata));
    let _ = writeln!(out, "{}", DIVIDER);
    let _ = writeln!(out, "Comments ({})", result.comments.len());

    if with_comments {
        for comment in &result.comments {
            let _ = writeln!(out, "{}", DIVIDER);
            let _ = writeln!(out, "{}", render_comment(comment));
        }
    }

    out
}
