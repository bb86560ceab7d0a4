use std::collections::BTreeMap;

use serde::Serialize;
use snafu::ResultExt;

use crate::error::JsonSnafu;
use crate::prelude::*;

/// A single host's attributes, keyed by attribute name.
///
/// Keys are unique and held in lexicographic order, so the serialized form
/// is byte-for-byte deterministic regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AssetRecord(BTreeMap<String, String>);

impl AssetRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The built-in sample record, reported until remote collection lands.
    pub fn sample() -> Self {
        let mut record = Self::new();
        record.insert("name", "mach100");
        record.insert("foo", "bar");
        record.insert("ip", "10.18.1.100");
        record
    }

    /// Serializes the record as a compact JSON object.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context(JsonSnafu)
    }
}
