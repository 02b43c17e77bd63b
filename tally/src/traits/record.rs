use core::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Creation timestamp of a record.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Identifier of a record within its collection.
///
/// Ids are issued by the [`Store`](crate::Store) from a strictly increasing
/// sequence and are never reused, even after the record is deleted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    /// Returns the id following this one, or `None` once the sequence is exhausted.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(RecordId)
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        RecordId(value)
    }
}

/// The main trait of the crate, describing a record type stored as one collection.
///
/// Usually implemented with `#[derive(Record)]`, which also generates the draft
/// and patch types.
pub trait Record: Serialize + DeserializeOwned + Clone + Debug {
    /// Name of the collection, used as the default persistence key.
    const COLLECTION: &'static str;
    /// Fields a caller supplies when creating a record.
    type Draft;
    /// Partial update; fields left unset are preserved.
    type Patch: Default;

    fn id(&self) -> RecordId;
    fn created_at(&self) -> Timestamp;

    /// Builds a stored record from caller fields plus the store-assigned id and timestamp.
    fn from_draft(id: RecordId, created_at: Timestamp, draft: Self::Draft) -> Self;

    /// Shallow-merges the patch over `self`. Never touches the id or the creation timestamp.
    fn merge(&mut self, patch: Self::Patch);
}

/// A record type with a fixed seed table used to bootstrap an empty collection.
pub trait Seeded: Record {
    /// Returns the seed records in seed order.
    ///
    /// `now` stamps the seed entries that represent "today".
    fn seed(now: Timestamp) -> Vec<Self>;
}
