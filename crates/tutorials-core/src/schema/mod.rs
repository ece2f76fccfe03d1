//! Declarative record schemas and the validator that interprets them.
//!
//! A [`Schema`] is a static list of [`FieldSpec`]s: field name, expected
//! kind and presence rule. [`Schema::validate`] walks a [`RawValue`] against
//! it and returns either a typed [`Entry`] or a [`ValidationError`] naming
//! every offending field.

mod date;
mod error;

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::front_matter::RawValue;

pub use error::{FieldIssue, IssueKind, ValidationError};

/// Expected shape of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    /// Coerced from date text, TOML dates or epoch milliseconds.
    Date,
    StringList,
}

impl FieldKind {
    pub fn expected(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Date => "date",
            FieldKind::StringList => "array",
        }
    }
}

/// What happens when a key is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
    /// Absent means an empty list. Only meaningful for [`FieldKind::StringList`].
    DefaultEmptyList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub presence: Presence,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Required,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Optional,
        }
    }

    pub const fn string_list_or_empty(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::StringList,
            presence: Presence::DefaultEmptyList,
        }
    }
}

/// A validated field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    String(String),
    Date(NaiveDate),
    StringList(Vec<String>),
}

/// Field values that passed validation, keyed by schema field name.
///
/// Optional fields that were absent have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    values: BTreeMap<&'static str, FieldValue>,
}

impl Entry {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn take_string(&mut self, name: &str) -> Option<String> {
        self.take_with(name, |v| match v {
            FieldValue::String(s) => Ok(s),
            other => Err(other),
        })
    }

    pub fn take_date(&mut self, name: &str) -> Option<NaiveDate> {
        self.take_with(name, |v| match v {
            FieldValue::Date(d) => Ok(d),
            other => Err(other),
        })
    }

    pub fn take_string_list(&mut self, name: &str) -> Option<Vec<String>> {
        self.take_with(name, |v| match v {
            FieldValue::StringList(list) => Ok(list),
            other => Err(other),
        })
    }

    /// Removes `name` if `extract` accepts its value; otherwise leaves it in place.
    fn take_with<T>(
        &mut self,
        name: &str,
        extract: impl FnOnce(FieldValue) -> Result<T, FieldValue>,
    ) -> Option<T> {
        let (key, value) = self.values.remove_entry(name)?;
        match extract(value) {
            Ok(v) => Some(v),
            Err(value) => {
                self.values.insert(key, value);
                None
            }
        }
    }
}

/// Ordered set of field rules for one content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    fields: &'static [FieldSpec],
}

impl Schema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validates raw front matter against this schema.
    ///
    /// A null root (empty front matter) is treated as an empty mapping. Keys
    /// the schema does not name are ignored. All issues are collected before
    /// returning.
    pub fn validate(&self, raw: &RawValue) -> Result<Entry, ValidationError> {
        let empty = BTreeMap::new();
        let map = match raw {
            RawValue::Mapping(map) => map,
            RawValue::Null => &empty,
            other => {
                return Err(ValidationError::new(vec![FieldIssue::new(
                    "",
                    IssueKind::NotAMapping {
                        found: other.type_name(),
                    },
                )]))
            }
        };

        let mut entry = Entry::default();
        let mut issues = Vec::new();

        for spec in self.fields {
            match (map.get(spec.name), spec.presence) {
                (None | Some(RawValue::Null), Presence::Required) => {
                    issues.push(FieldIssue::new(spec.name, IssueKind::Missing));
                }
                (None, Presence::Optional) => {}
                (None, Presence::DefaultEmptyList) => {
                    entry
                        .values
                        .insert(spec.name, FieldValue::StringList(Vec::new()));
                }
                (Some(value), presence) => match coerce(spec, presence, value) {
                    Ok(v) => {
                        entry.values.insert(spec.name, v);
                    }
                    Err(mut found) => issues.append(&mut found),
                },
            }
        }

        for key in map.keys().filter(|k| self.field(k).is_none()) {
            tracing::debug!("ignoring front matter key not in schema: {}", key);
        }

        if issues.is_empty() {
            Ok(entry)
        } else {
            Err(ValidationError::new(issues))
        }
    }
}

fn coerce(
    spec: &FieldSpec,
    presence: Presence,
    value: &RawValue,
) -> Result<FieldValue, Vec<FieldIssue>> {
    let issue = |kind: IssueKind| vec![FieldIssue::new(spec.name, kind)];

    match spec.kind {
        FieldKind::String => match value {
            RawValue::String(s) if presence == Presence::Required && s.trim().is_empty() => {
                Err(issue(IssueKind::Empty))
            }
            RawValue::String(s) => Ok(FieldValue::String(s.clone())),
            other => Err(issue(wrong_type(spec.kind, other))),
        },
        FieldKind::Date => date::coerce_date(value)
            .map(FieldValue::Date)
            .map_err(issue),
        FieldKind::StringList => match value {
            RawValue::Sequence(items) => {
                let mut list = Vec::with_capacity(items.len());
                let mut issues = Vec::new();
                for (i, item) in items.iter().enumerate() {
                    match item {
                        RawValue::String(s) => list.push(s.clone()),
                        other => issues.push(FieldIssue::new(
                            format!("{}[{}]", spec.name, i),
                            wrong_type(FieldKind::String, other),
                        )),
                    }
                }
                if issues.is_empty() {
                    Ok(FieldValue::StringList(list))
                } else {
                    Err(issues)
                }
            }
            other => Err(issue(wrong_type(spec.kind, other))),
        },
    }
}

fn wrong_type(kind: FieldKind, found: &RawValue) -> IssueKind {
    IssueKind::WrongType {
        expected: kind.expected(),
        found: found.type_name(),
    }
}

#[cfg(test)]
mod tests;
