//! Error types for schema validation.

use std::fmt;

/// What is wrong with one field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IssueKind {
    /// A required key is absent or null.
    #[error("required field is missing")]
    Missing,
    /// The value has the wrong primitive type.
    #[error("expected {expected}, found {found}")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    /// The value cannot be coerced into a calendar date.
    #[error("cannot parse {0:?} as a date")]
    InvalidDate(String),
    /// A required string is empty or whitespace.
    #[error("must not be empty")]
    Empty,
    /// The front matter root is not a key/value mapping.
    #[error("front matter must be a mapping, found {found}")]
    NotAMapping { found: &'static str },
}

/// One offending field, addressed by path (`title`, `tags[2]`; empty for the root).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub path: String,
    pub kind: IssueKind,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Top-level field name this issue belongs to (`tags` for `tags[2]`).
    pub fn field(&self) -> &str {
        self.path.split('[').next().unwrap_or(&self.path)
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.path, self.kind)
        }
    }
}

/// Raw front matter did not conform to the schema.
///
/// Lists every offending field, not only the first one found. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub(crate) fn new(issues: Vec<FieldIssue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self { issues }
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Distinct top-level field names with at least one issue, in schema order.
    pub fn fields(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for issue in &self.issues {
            let field = issue.field();
            if !out.contains(&field) {
                out.push(field);
            }
        }
        out
    }

    pub fn has_issue_for(&self, field: &str) -> bool {
        self.issues.iter().any(|i| i.field() == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid front matter")?;
        for (i, issue) in self.issues.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}", sep, issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_all_issues() {
        let err = ValidationError::new(vec![
            FieldIssue::new("title", IssueKind::Missing),
            FieldIssue::new(
                "tags[1]",
                IssueKind::WrongType {
                    expected: "string",
                    found: "integer",
                },
            ),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid front matter: title: required field is missing; tags[1]: expected string, found integer"
        );
    }

    #[test]
    fn fields_are_deduplicated() {
        let wrong = IssueKind::WrongType {
            expected: "string",
            found: "boolean",
        };
        let err = ValidationError::new(vec![
            FieldIssue::new("tags[0]", wrong.clone()),
            FieldIssue::new("tags[3]", wrong),
            FieldIssue::new("date", IssueKind::InvalidDate("soon".into())),
        ]);
        assert_eq!(err.fields(), vec!["tags", "date"]);
        assert!(err.has_issue_for("tags"));
        assert!(!err.has_issue_for("title"));
    }

    #[test]
    fn root_issue_has_no_path_prefix() {
        let issue = FieldIssue::new("", IssueKind::NotAMapping { found: "array" });
        assert_eq!(issue.to_string(), "front matter must be a mapping, found array");
    }
}
