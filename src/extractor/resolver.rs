//! Video URL recognition
//!
//! Maps a free-form string (usually pasted by a user) to the identifier the
//! remote API understands. Patterns are tried in priority order and the first
//! one found anywhere inside the input wins, so surrounding text, query
//! parameters and trailing path segments are tolerated.

use crate::extractor::models::VideoId;
use once_cell::sync::Lazy;
use regex::Regex;

/// Shapes are listed in the order they are tried.
const PATTERNS: &[&str] = &[
    // youtube.com/watch?v=ID (v may follow other query parameters)
    r"youtube\.com/watch\?(?:[^#\s]*?&)??v=([A-Za-z0-9_-]+)",
    // youtu.be/ID
    r"youtu\.be/([A-Za-z0-9_-]+)",
    // youtube.com/shorts/ID
    r"youtube\.com/shorts/([A-Za-z0-9_-]+)",
    // youtube.com/embed/ID
    r"youtube\.com/embed/([A-Za-z0-9_-]+)",
    // youtube.com/live/ID
    r"youtube\.com/live/([A-Za-z0-9_-]+)",
];

static URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    PATTERNS
        .iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .collect()
});

/// Extract the video identifier from a URL.
///
/// Returns `None` when no recognised address shape is present. This is an
/// expected outcome for arbitrary input, not an error.
pub fn resolve(url: &str) -> Option<VideoId> {
    URL_PATTERNS.iter().find_map(|re| {
        re.captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| VideoId::from_match(m.as_str()))
    })
}
