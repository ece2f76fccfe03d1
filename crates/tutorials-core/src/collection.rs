//! Collection registry handed to the site's content pipeline.
//!
//! The pipeline looks a collection up by name and validates each content
//! file's front matter through it. File discovery and rendering stay with
//! the pipeline.

use crate::front_matter::RawValue;
use crate::schema::{Entry, FieldKind, FieldSpec, Schema, ValidationError};

/// How entries of a collection are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    /// Markdown-like documents with front matter and a body.
    Content,
}

/// A named group of entries sharing one schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub name: &'static str,
    pub kind: CollectionKind,
    pub schema: Schema,
}

impl Collection {
    pub fn validate(&self, raw: &RawValue) -> Result<Entry, ValidationError> {
        let result = self.schema.validate(raw);
        if let Err(err) = &result {
            tracing::debug!("{} entry rejected: {}", self.name, err);
        }
        result
    }
}

const TUTORIAL_FIELDS: [FieldSpec; 5] = [
    FieldSpec::required("title", FieldKind::String),
    FieldSpec::required("date", FieldKind::Date),
    FieldSpec::required("description", FieldKind::String),
    FieldSpec::string_list_or_empty("tags"),
    FieldSpec::optional("youtubeUrl", FieldKind::String),
];

/// Schema of the `tutorials` collection.
pub const TUTORIAL_SCHEMA: Schema = Schema::new(&TUTORIAL_FIELDS);

pub const TUTORIALS: Collection = Collection {
    name: "tutorials",
    kind: CollectionKind::Content,
    schema: TUTORIAL_SCHEMA,
};

static COLLECTIONS: [Collection; 1] = [TUTORIALS];

/// Every registered collection.
pub fn collections() -> &'static [Collection] {
    &COLLECTIONS
}

/// Looks up a collection by name.
pub fn collection(name: &str) -> Option<&'static Collection> {
    COLLECTIONS.iter().find(|c| c.name == name)
}
