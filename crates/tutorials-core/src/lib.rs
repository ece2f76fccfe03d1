//! Schema for a static site's `tutorials` collection plus YouTube URL helpers.
//!
//! [`collection`] is the registry the site's content pipeline calls into,
//! [`schema`] the validator behind it, and [`youtube`] the pure URL
//! functions page templates use.

pub mod collection;
pub mod config;
pub mod front_matter;
pub mod logging;
pub mod schema;
pub mod tutorial;
pub mod youtube;

pub use collection::{collection, collections, Collection, TUTORIALS};
pub use front_matter::{parse_document, split_front_matter, FrontMatterError, RawValue};
pub use schema::{FieldIssue, IssueKind, ValidationError};
pub use tutorial::TutorialRecord;
pub use youtube::{embed_url, extract_video_id, thumbnail_url, ThumbnailQuality, VideoId};
