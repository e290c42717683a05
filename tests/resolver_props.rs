//! Property-based tests for URL resolution.

use proptest::prelude::*;
use yt_comments::resolve;

fn video_id() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,20}"
}

/// Query or path tail that starts with a character outside the id alphabet
fn tail() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "&[a-z]{1,5}=[A-Za-z0-9]{0,8}",
        "\\?[a-z]{1,5}=[A-Za-z0-9]{0,8}",
        "/[a-z]{1,8}",
        " [a-z ]{0,10}",
    ]
}

proptest! {
    #[test]
    fn watch_urls_resolve(id in video_id(), tail in tail(), www in any::<bool>()) {
        let host = if www { "www.youtube.com" } else { "youtube.com" };
        let url = format!("https://{}/watch?v={}{}", host, id, tail);
        prop_assert_eq!(resolve(&url).map(|v| v.to_string()), Some(id));
    }

    #[test]
    fn short_domain_urls_resolve(id in video_id(), tail in tail()) {
        let url = format!("https://youtu.be/{}{}", id, tail);
        prop_assert_eq!(resolve(&url).map(|v| v.to_string()), Some(id));
    }

    #[test]
    fn shorts_urls_resolve(id in video_id(), tail in tail()) {
        let url = format!("https://www.youtube.com/shorts/{}{}", id, tail);
        prop_assert_eq!(resolve(&url).map(|v| v.to_string()), Some(id));
    }

    #[test]
    fn unrelated_hosts_never_resolve(path in "[a-z0-9/?=&_-]{0,40}") {
        let url = format!("https://example.com/{}", path);
        prop_assert!(resolve(&url).is_none());
    }

    #[test]
    fn resolve_never_panics(input in ".*") {
        let _ = resolve(&input);
    }
}
