//! Data structures for resolved videos and their comments

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical video identifier as used by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Accepts a bare identifier made only of `[A-Za-z0-9_-]`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if !raw.is_empty() && raw.chars().all(is_id_char) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub(crate) fn from_match(raw: &str) -> Self {
        Self(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Title and engagement counters of a video.
///
/// A `None` counter means the platform did not report it (hidden or
/// disabled), which is different from a count of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub comment_count: Option<u64>,
}

/// One top-level comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub author: String,
    pub text: String,
    pub like_count: u64,
    pub published_at: DateTime<Utc>,
    pub reply_count: u64,
}

/// Everything a single fetch produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub metadata: VideoMetadata,
    /// Platform order, never re-sorted
    pub comments: Vec<CommentRecord>,
}

/// Comment body encoding requested from the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextFormat {
    #[default]
    PlainText,
    Html,
}

impl TextFormat {
    /// Value of the `textFormat` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            TextFormat::PlainText => "plainText",
            TextFormat::Html => "html",
        }
    }
}
