//! Dataset parsing.
//!
//! Accepts either a JSON array of entry objects or an object whose values are
//! entry objects. Entries without a uid get their position as uid, so loading
//! the same bytes twice always yields the same collection.

use std::path::Path;

use serde_json::Value;

use super::entries::EntryStore;
use crate::domain::{DatasetError, Entry};
use crate::infra::hash::hash64;

/// A parsed dataset and the digest of the bytes it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDataset {
    pub store: EntryStore,
    pub digest: u64,
}

pub fn parse_dataset(bytes: &[u8]) -> Result<LoadedDataset, DatasetError> {
    let raw: Value = serde_json::from_slice(bytes)?;
    let items: Vec<Value> = match raw {
        Value::Array(items) => items,
        Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
        other => return Err(DatasetError::UnsupportedShape(json_kind(&other))),
    };
    if items.is_empty() {
        return Err(DatasetError::Empty);
    }

    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            return Err(DatasetError::InvalidEntry {
                index,
                reason: format!("expected an object, found {}", json_kind(&item)),
            });
        }
        let mut entry: Entry =
            serde_json::from_value(item).map_err(|e| DatasetError::InvalidEntry {
                index,
                reason: e.to_string(),
            })?;
        if entry.uid.is_empty() {
            entry.uid = index.to_string();
        }
        entries.push(entry);
    }

    Ok(LoadedDataset {
        store: EntryStore::from_entries(entries)?,
        digest: hash64(bytes),
    })
}

pub fn load_dataset_file(path: &Path) -> Result<LoadedDataset, DatasetError> {
    let bytes = std::fs::read(path)?;
    parse_dataset(&bytes)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
