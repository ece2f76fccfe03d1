//! Video ID extraction from the link shapes YouTube URLs come in.

use super::VideoId;

/// Extracts a video ID from a YouTube URL.
///
/// Checked in order, first match wins:
/// 1. a `v` query key (`?v=ID` or `&v=ID`), up to the next `&`
/// 2. `youtu.be/ID`, up to the next `?` or `&`
/// 3. `embed/ID`, up to the next `?` or `&`
///
/// Returns `None` for empty input or when no shape matches. The token is not
/// percent-decoded or checked for plausibility.
///
/// # Examples
///
/// - `extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=30s")` → `Some("dQw4w9WgXcQ")`
/// - `extract_video_id("https://youtu.be/dQw4w9WgXcQ")` → `Some("dQw4w9WgXcQ")`
/// - `extract_video_id("https://example.com/no-video-here")` → `None`
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    if url.is_empty() {
        return None;
    }

    query_v(url)
        .or_else(|| after_marker(url, "youtu.be/", &['?', '&']))
        .or_else(|| after_marker(url, "embed/", &['?', '&']))
        .map(VideoId::from)
}

/// Value of the first `v=` whose key starts right after `?` or `&`.
fn query_v(url: &str) -> Option<&str> {
    let bytes = url.as_bytes();
    url.match_indices("v=")
        .filter(|(idx, _)| *idx > 0 && matches!(bytes[idx - 1], b'?' | b'&'))
        .find_map(|(idx, m)| token(&url[idx + m.len()..], &['&']))
}

fn after_marker<'a>(url: &'a str, marker: &str, stops: &[char]) -> Option<&'a str> {
    url.match_indices(marker)
        .find_map(|(idx, m)| token(&url[idx + m.len()..], stops))
}

/// Leading run of `rest` before any stop char; `None` if that run is empty.
fn token<'a>(rest: &'a str, stops: &[char]) -> Option<&'a str> {
    let end = rest.find(stops).unwrap_or(rest.len());
    if end == 0 {
        None
    } else {
        Some(&rest[..end])
    }
}
