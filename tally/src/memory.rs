use std::{
    collections::BTreeMap,
    error::Error,
    fmt::{self, Display},
};

use crate::Persistence;

/// A memory-based persistence backend using a [`BTreeMap`].
///
/// Optionally enforces a byte quota over all stored keys and payloads, the way
/// browser storage does. A write that would exceed the quota fails and leaves
/// the previous payload in place.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    entries: BTreeMap<String, String>,
    quota: Option<usize>,
}

/// Error type for [`MemoryPersistence`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryPersistenceError {
    /// The write would bring the stored bytes above the quota.
    QuotaExceeded { required: usize, quota: usize },
}

impl Display for MemoryPersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuotaExceeded { required, quota } => {
                write!(f, "Storage quota exceeded: {required} bytes required, {quota} available")
            }
        }
    }
}

impl Error for MemoryPersistenceError {}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend that rejects writes once `quota` bytes are stored.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            quota: Some(quota),
        }
    }

    /// Changes the quota. Payloads already stored are kept even if they exceed it.
    pub fn set_quota(&mut self, quota: Option<usize>) {
        self.quota = quota;
    }

    /// Total bytes held, counting keys and payloads.
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    /// Keys currently present, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Removes a key; the next `get` returns `None` as if it was never written.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }
}

impl Persistence for MemoryPersistence {
    type Error = MemoryPersistenceError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), Self::Error> {
        if let Some(quota) = self.quota {
            let replaced = self.entries.get(key).map_or(0, |old| key.len() + old.len());
            let required = self.used_bytes() - replaced + key.len() + value.len();
            if required > quota {
                return Err(MemoryPersistenceError::QuotaExceeded { required, quota });
            }
        }
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }
}
