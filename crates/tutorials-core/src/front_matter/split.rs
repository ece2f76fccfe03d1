//! Locating the fenced metadata block.

use super::FrontMatterError;

/// Syntax of a front matter block, told apart by its fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterFormat {
    Yaml,
    Toml,
}

impl FrontMatterFormat {
    pub fn delimiter(self) -> &'static str {
        match self {
            FrontMatterFormat::Yaml => "---",
            FrontMatterFormat::Toml => "+++",
        }
    }
}

/// A document split into its metadata text and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    pub format: FrontMatterFormat,
    pub metadata: &'a str,
    pub body: &'a str,
}

/// Splits a document at its front matter fences.
///
/// The opening fence must be the first line (a UTF-8 BOM is skipped). The
/// closing fence is the next line consisting only of the same delimiter,
/// ignoring surrounding whitespace.
pub fn split_front_matter(document: &str) -> Result<FrontMatter<'_>, FrontMatterError> {
    let document = document.strip_prefix('\u{feff}').unwrap_or(document);
    let (first, rest) = split_line(document);

    let format = match first.trim_end() {
        "---" => FrontMatterFormat::Yaml,
        "+++" => FrontMatterFormat::Toml,
        _ => return Err(FrontMatterError::MissingOpening),
    };
    let rest = rest.ok_or(FrontMatterError::Unterminated(format))?;

    let mut offset = 0;
    let mut remaining = rest;
    loop {
        let (line, next) = split_line(remaining);
        if line.trim() == format.delimiter() {
            return Ok(FrontMatter {
                format,
                metadata: &rest[..offset],
                body: next.unwrap_or(""),
            });
        }
        match next {
            Some(next) => {
                offset += remaining.len() - next.len();
                remaining = next;
            }
            None => return Err(FrontMatterError::Unterminated(format)),
        }
    }
}

/// First line of `s` (without its line ending) and what follows the newline.
fn split_line(s: &str) -> (&str, Option<&str>) {
    match s.find('\n') {
        Some(pos) => (s[..pos].trim_end_matches('\r'), Some(&s[pos + 1..])),
        None => (s, None),
    }
}
