//! Front matter splitting: metadata block at the top of a content document.
//!
//! YAML blocks are fenced by `---` lines, TOML blocks by `+++` lines. The
//! parsed block becomes a [`RawValue`] tree that the schema validator reads.

mod raw;
mod split;

pub use raw::RawValue;
pub use split::{split_front_matter, FrontMatter, FrontMatterFormat};

use std::fmt;

/// Failure to locate or parse a front matter block.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    #[error("missing opening front matter delimiter (`---` or `+++`)")]
    MissingOpening,
    #[error("front matter opened with `{0}` is never closed")]
    Unterminated(FrontMatterFormat),
    #[error("invalid YAML front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid TOML front matter: {0}")]
    Toml(#[from] toml::de::Error),
}

impl fmt::Display for FrontMatterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.delimiter())
    }
}

/// Splits `document` and parses its front matter block.
///
/// Returns the parsed metadata and the body that follows the closing delimiter.
pub fn parse_document(document: &str) -> Result<(RawValue, &str), FrontMatterError> {
    let fm = split_front_matter(document)?;
    let raw = match fm.format {
        FrontMatterFormat::Yaml => RawValue::from_yaml_str(fm.metadata)?,
        FrontMatterFormat::Toml => RawValue::from_toml_str(fm.metadata)?,
    };
    Ok((raw, fm.body))
}
