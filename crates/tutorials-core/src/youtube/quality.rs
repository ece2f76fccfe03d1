//! Thumbnail quality variants offered by the thumbnail service.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Image-resolution variant of a video thumbnail.
///
/// Named `default`, `medium`, `high` and `maxres` in config files and on the
/// command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailQuality {
    /// 120x90.
    Default,
    /// 320x180.
    Medium,
    /// 480x360.
    High,
    /// Largest available; not generated for every video.
    MaxRes,
}

impl ThumbnailQuality {
    pub const ALL: [ThumbnailQuality; 4] = [
        ThumbnailQuality::Default,
        ThumbnailQuality::Medium,
        ThumbnailQuality::High,
        ThumbnailQuality::MaxRes,
    ];

    /// Image file stem used by the thumbnail service for this quality.
    pub fn token(self) -> &'static str {
        match self {
            ThumbnailQuality::Default => "default",
            ThumbnailQuality::Medium => "mqdefault",
            ThumbnailQuality::High => "hqdefault",
            ThumbnailQuality::MaxRes => "maxresdefault",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThumbnailQuality::Default => "default",
            ThumbnailQuality::Medium => "medium",
            ThumbnailQuality::High => "high",
            ThumbnailQuality::MaxRes => "maxres",
        }
    }
}

impl Default for ThumbnailQuality {
    fn default() -> Self {
        ThumbnailQuality::Medium
    }
}

impl fmt::Display for ThumbnailQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a quality name is not one of the four known variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown thumbnail quality {0:?} (expected default, medium, high or maxres)")]
pub struct UnknownQuality(pub String);

impl FromStr for ThumbnailQuality {
    type Err = UnknownQuality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThumbnailQuality::ALL
            .into_iter()
            .find(|q| q.name() == s)
            .ok_or_else(|| UnknownQuality(s.to_string()))
    }
}
