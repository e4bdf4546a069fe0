//! Session-local records
//!
//! Records are sparse: a field the user never touched is absent, not
//! defaulted. They live only for the session and are dropped when the
//! workspace switches dictionaries.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// A single stored field value
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordValue {
    /// Free text (string and reference fields)
    Text(String),
    /// Numeric fields; may hold NaN when the input was not a number
    Number(f64),
    Boolean(bool),
    /// Opaque text for object, array, null and unknown fields. Never parsed.
    Raw(String),
}

impl RecordValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RecordValue::Text(s) | RecordValue::Raw(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            RecordValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordValue::Text(s) | RecordValue::Raw(s) => f.write_str(s),
            // f64 Display already prints 30.0 as "30" and NaN as "NaN"
            RecordValue::Number(n) => write!(f, "{}", n),
            RecordValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// One record: field name -> value, in insertion order
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, RecordValue>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&RecordValue> {
        self.0.get(field)
    }

    /// Create-or-overwrite one field
    pub fn insert(&mut self, field: impl Into<String>, value: RecordValue) {
        self.0.insert(field.into(), value);
    }

    pub fn remove(&mut self, field: &str) -> Option<RecordValue> {
        self.0.shift_remove(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RecordValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<K: Into<String>> FromIterator<(K, RecordValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, RecordValue)>>(iter: I) -> Self {
        Record(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Ordered records of the currently open dictionary
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordCollection(Vec<Record>);

impl RecordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.0.push(record);
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.0.get(index)
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
