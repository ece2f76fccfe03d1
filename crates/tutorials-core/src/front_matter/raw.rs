//! Format-neutral tree of front matter values.

use std::collections::BTreeMap;

/// A parsed front matter value, before any schema has been applied.
///
/// YAML, TOML and JSON inputs all convert into this shape so one validator
/// serves every source. TOML date and date-time literals keep their text form
/// in [`RawValue::Datetime`].
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Datetime(String),
    Sequence(Vec<RawValue>),
    Mapping(BTreeMap<String, RawValue>),
}

impl RawValue {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        let value: serde_yaml::Value = serde_yaml::from_str(s)?;
        Ok(Self::from(value))
    }

    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        let table: toml::Table = toml::from_str(s)?;
        Ok(Self::from(toml::Value::Table(table)))
    }

    /// Looks up `key` when this is a mapping.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        match self {
            RawValue::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    /// Short name of the value's type, used in validation messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "boolean",
            RawValue::Integer(_) => "integer",
            RawValue::Float(_) => "float",
            RawValue::String(_) => "string",
            RawValue::Datetime(_) => "datetime",
            RawValue::Sequence(_) => "array",
            RawValue::Mapping(_) => "object",
        }
    }
}

impl From<serde_yaml::Value> for RawValue {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => RawValue::Null,
            Value::Bool(b) => RawValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => RawValue::Integer(i),
                None => RawValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => RawValue::String(s),
            Value::Sequence(seq) => RawValue::Sequence(seq.into_iter().map(Self::from).collect()),
            Value::Mapping(map) => {
                let mut out = BTreeMap::new();
                for (k, v) in map {
                    match yaml_key(&k) {
                        Some(key) => {
                            out.insert(key, Self::from(v));
                        }
                        None => tracing::debug!("skipping non-scalar front matter key {:?}", k),
                    }
                }
                RawValue::Mapping(out)
            }
            Value::Tagged(tagged) => Self::from(tagged.value),
        }
    }
}

fn yaml_key(key: &serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value;

    match key {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl From<toml::Value> for RawValue {
    fn from(value: toml::Value) -> Self {
        use toml::Value;

        match value {
            Value::String(s) => RawValue::String(s),
            Value::Integer(i) => RawValue::Integer(i),
            Value::Float(f) => RawValue::Float(f),
            Value::Boolean(b) => RawValue::Bool(b),
            Value::Datetime(dt) => RawValue::Datetime(dt.to_string()),
            Value::Array(items) => RawValue::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Table(table) => RawValue::Mapping(
                table
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => RawValue::Null,
            Value::Bool(b) => RawValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => RawValue::Integer(i),
                None => RawValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => RawValue::String(s),
            Value::Array(items) => RawValue::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => RawValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}
