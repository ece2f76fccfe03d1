//! YouTube URL helpers.
//!
//! Pure string functions: pull a video ID out of the usual link shapes and
//! build thumbnail and embed URLs from an ID. Nothing here touches the network;
//! an ID is only ever matched syntactically.

mod extract;
mod quality;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use extract::extract_video_id;
pub use quality::{ThumbnailQuality, UnknownQuality};

const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";
const EMBED_BASE: &str = "https://www.youtube.com/embed";

/// Opaque token identifying a hosted video.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn thumbnail_url(&self, quality: Option<ThumbnailQuality>) -> String {
        thumbnail_url(&self.0, quality)
    }

    pub fn embed_url(&self) -> String {
        embed_url(&self.0)
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

impl From<&str> for VideoId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for VideoId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Builds the `img.youtube.com` thumbnail URL for a video.
///
/// `None` selects [`ThumbnailQuality::Medium`] (320x180). The ID is not
/// re-validated.
///
/// # Examples
///
/// - `thumbnail_url("dQw4w9WgXcQ", Some(ThumbnailQuality::High))` →
///   `"https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"`
pub fn thumbnail_url(video_id: &str, quality: Option<ThumbnailQuality>) -> String {
    let quality = quality.unwrap_or_default();
    format!("{}/{}/{}.jpg", THUMBNAIL_BASE, video_id, quality.token())
}

/// Builds the embeddable player URL for a video.
pub fn embed_url(video_id: &str) -> String {
    format!("{}/{}", EMBED_BASE, video_id)
}
