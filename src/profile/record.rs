//! Profile record
//!
//! A flat mapping of form field name to value, stored as a JSON object.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use super::error::{ProfileError, ProfileResult};

/// Saved profile fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProfileRecord {
    fields: BTreeMap<String, String>,
}

impl ProfileRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Encode as the JSON text kept in storage
    pub fn to_json(&self) -> ProfileResult<String> {
        serde_json::to_string(self).map_err(|e| ProfileError::Serialization(e.to_string()))
    }

    /// Decode stored JSON text.
    ///
    /// The text must be a JSON object. Numbers and booleans become their
    /// text form and `null` becomes an empty value; nested arrays and
    /// objects are skipped.
    pub fn from_json(raw: &str) -> ProfileResult<Self> {
        let object: BTreeMap<String, Value> =
            serde_json::from_str(raw).map_err(|e| ProfileError::Malformed(e.to_string()))?;

        let mut record = Self::new();
        for (name, value) in object {
            match scalar_text(value) {
                Some(text) => record.insert(name, text),
                None => tracing::debug!(field = %name, "skipping non-scalar profile value"),
            }
        }
        Ok(record)
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProfileRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
