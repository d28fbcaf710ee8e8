//! In-memory entry collection, addressable by uid.

use std::collections::HashMap;

use crate::domain::{DatasetError, Entry, EntryUid};

/// Entries in load order plus a uid index. Entries are never removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryStore {
    entries: Vec<Entry>,
    index: HashMap<EntryUid, usize>,
}

impl EntryStore {
    /// Build a store, rejecting blank or duplicate uids.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self, DatasetError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if entry.uid.is_empty() {
                return Err(DatasetError::InvalidEntry {
                    index: position,
                    reason: "missing uid".into(),
                });
            }
            if index.insert(entry.uid.clone(), position).is_some() {
                return Err(DatasetError::DuplicateUid(entry.uid.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, uid: &str) -> Option<&Entry> {
        self.index.get(uid).map(|&i| &self.entries[i])
    }

    pub fn get_mut(&mut self, uid: &str) -> Option<&mut Entry> {
        let i = *self.index.get(uid)?;
        self.entries.get_mut(i)
    }

    pub fn contains(&self, uid: &str) -> bool {
        self.index.contains_key(uid)
    }

    pub fn position(&self, uid: &str) -> Option<usize> {
        self.index.get(uid).copied()
    }

    /// Uids in load order.
    pub fn uids(&self) -> Vec<EntryUid> {
        self.entries.iter().map(|e| e.uid.clone()).collect()
    }

    pub fn first_uid(&self) -> Option<&str> {
        self.entries.first().map(|e| e.uid.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn reviewed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_reviewed()).count()
    }
}
