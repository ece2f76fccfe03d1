//! Typed record for one entry of the `tutorials` collection.

use chrono::NaiveDate;
use serde::Serialize;

use crate::collection::TUTORIALS;
use crate::front_matter::RawValue;
use crate::schema::{Entry, FieldIssue, IssueKind, ValidationError};
use crate::youtube::{self, ThumbnailQuality, VideoId};

/// Validated front matter of a tutorial page.
///
/// Serializes with the site's front matter key names (`youtubeUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialRecord {
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
}

impl TutorialRecord {
    /// Validates raw front matter against the tutorials schema.
    pub fn from_front_matter(raw: &RawValue) -> Result<Self, ValidationError> {
        TUTORIALS.validate(raw).and_then(Self::try_from)
    }

    /// Video ID derived from `youtube_url`, if the URL has a recognizable shape.
    pub fn video_id(&self) -> Option<VideoId> {
        self.youtube_url
            .as_deref()
            .and_then(youtube::extract_video_id)
    }

    pub fn thumbnail_url(&self, quality: Option<ThumbnailQuality>) -> Option<String> {
        self.video_id().map(|id| id.thumbnail_url(quality))
    }

    pub fn embed_url(&self) -> Option<String> {
        self.video_id().map(|id| id.embed_url())
    }
}

impl TryFrom<Entry> for TutorialRecord {
    type Error = ValidationError;

    /// Builds the record from an entry validated by the tutorials schema.
    ///
    /// An entry from a different schema fails with `Missing` for each absent
    /// required field.
    fn try_from(mut entry: Entry) -> Result<Self, Self::Error> {
        let title = entry.take_string("title");
        let date = entry.take_date("date");
        let description = entry.take_string("description");
        let tags = entry.take_string_list("tags").unwrap_or_default();
        let youtube_url = entry.take_string("youtubeUrl");

        match (title, date, description) {
            (Some(title), Some(date), Some(description)) => Ok(Self {
                title,
                date,
                description,
                tags,
                youtube_url,
            }),
            (title, date, description) => {
                let issues = [
                    ("title", title.is_none()),
                    ("date", date.is_none()),
                    ("description", description.is_none()),
                ]
                .into_iter()
                .filter(|(_, missing)| *missing)
                .map(|(name, _)| FieldIssue::new(name, IssueKind::Missing))
                .collect();
                Err(ValidationError::new(issues))
            }
        }
    }
}
