use serde::{Deserialize, Serialize};

use crate::RecordId;

/// One row of the sequence table: the last id issued for a collection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct SequenceEntry {
    pub collection: String,
    pub last: RecordId,
}

/// The persisted id sequences of every collection.
///
/// Ids are issued as one past the larger of the recorded high-water mark and the
/// largest id still present, so an id freed by a delete is never handed out again.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Manifest {
    entries: Vec<SequenceEntry>,
}

impl Manifest {
    pub fn from_entries(entries: Vec<SequenceEntry>) -> Self {
        Manifest { entries }
    }

    pub fn entries(&self) -> &[SequenceEntry] {
        &self.entries
    }

    pub fn last(&self, collection: &str) -> RecordId {
        self.entries
            .iter()
            .find(|entry| entry.collection == collection)
            .map(|entry| entry.last)
            .unwrap_or_default()
    }

    /// Returns the next id for `collection`, given the largest id present in it.
    pub fn next_id(&self, collection: &str, max_present: RecordId) -> Option<RecordId> {
        self.last(collection).max(max_present).next()
    }

    /// Records `id` as issued. The high-water mark never moves backwards.
    pub fn record(&mut self, collection: &str, id: RecordId) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.collection == collection)
        {
            Some(entry) => entry.last = entry.last.max(id),
            None => self.entries.push(SequenceEntry {
                collection: collection.to_owned(),
                last: id,
            }),
        }
    }
}
