use tracing::{debug, info, warn};

use crate::manifest::{Manifest, SequenceEntry};
use crate::statistics::most_recent;
use crate::{
    Clock, Codec, ConfigError, CsvCodec, MemoryPersistence, Persistence, Product, Record,
    RecordId, Seeded, Statistics, StoreConfig, StoreError, SystemClock, User,
};

/// Result of a store operation over persistence backend `P`.
pub type StoreResult<T, P> = Result<T, StoreError<<P as Persistence>::Error>>;

/// The `tally` record store. All interactions with the collections go through this type.
///
/// Every read decodes the whole collection from the persistence backend, and every
/// mutation encodes and writes the whole collection back. Mutations take `&mut self`,
/// so a read-modify-write cycle can never interleave with another one.
pub struct Store<P: Persistence, C: Codec = CsvCodec, K: Clock = SystemClock> {
    persistence: P,
    codec: C,
    clock: K,
    config: StoreConfig,
}

impl Default for Store<MemoryPersistence> {
    fn default() -> Self {
        Store::new(MemoryPersistence::new())
    }
}

impl<P: Persistence> Store<P> {
    /// Creates a store over any persistence backend, with the CSV codec and the system clock.
    pub fn new(persistence: P) -> Self {
        Store {
            persistence,
            codec: CsvCodec,
            clock: SystemClock,
            config: StoreConfig::default(),
        }
    }

    /// Creates a store with custom settings.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if two persistence keys collide or one is empty.
    pub fn with_config(persistence: P, config: StoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Store {
            config,
            ..Self::new(persistence)
        })
    }
}

impl<P: Persistence, C: Codec, K: Clock> Store<P, C, K> {
    /// Replaces the payload codec. Existing payloads must already be in the new encoding.
    pub fn with_codec<C2: Codec>(self, codec: C2) -> Store<P, C2, K> {
        Store {
            persistence: self.persistence,
            codec,
            clock: self.clock,
            config: self.config,
        }
    }

    /// Replaces the clock used for creation timestamps, seeds and "today".
    pub fn with_clock<K2: Clock>(self, clock: K2) -> Store<P, C, K2> {
        Store {
            persistence: self.persistence,
            codec: self.codec,
            clock,
            config: self.config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Consumes the store and returns the persistence backend.
    pub fn into_inner(self) -> P {
        self.persistence
    }

    /// Returns every record of the collection in storage order.
    ///
    /// A collection that was never written is empty.
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be read or the payload is corrupt.
    pub fn list<R: Record>(&self) -> StoreResult<Vec<R>, P> {
        let key = self.config.collection_key(R::COLLECTION)?;
        let Some(payload) = self.persistence.get(key).map_err(StoreError::Persistence)? else {
            return Ok(Vec::new());
        };
        self.codec
            .decode(&payload)
            .map_err(|e| StoreError::codec(R::COLLECTION, e))
    }

    pub fn users(&self) -> StoreResult<Vec<User>, P> {
        self.list()
    }

    pub fn products(&self) -> StoreResult<Vec<Product>, P> {
        self.list()
    }

    /// Retrieves a record by id, or `None` if no record has it.
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the collection cannot be loaded.
    pub fn get<R: Record>(&self, id: RecordId) -> StoreResult<Option<R>, P> {
        Ok(self.list::<R>()?.into_iter().find(|record| record.id() == id))
    }

    /// Adds a record with a fresh id and the current time as its creation timestamp.
    ///
    /// The new collection payload is encoded and checked first. The id sequence is
    /// then persisted before the collection, so a failed collection write can only
    /// skip an id, never hand the same one out twice.
    /// # Errors
    ///
    /// Returns a [`StoreError`] if loading or writing fails, or the id sequence is exhausted.
    pub fn add<R: Record>(&mut self, draft: R::Draft) -> StoreResult<R, P> {
        let mut records = self.list::<R>()?;
        let mut manifest = self.load_manifest()?;

        let max_present = records
            .iter()
            .map(|record| record.id())
            .max()
            .unwrap_or_default();
        let id = manifest
            .next_id(R::COLLECTION, max_present)
            .ok_or_else(|| StoreError::IdExhausted {
                collection: R::COLLECTION.to_owned(),
            })?;

        let record = R::from_draft(id, self.clock.now(), draft);
        records.push(record.clone());
        let payload = self.encode_checked(&records)?;

        manifest.record(R::COLLECTION, id);
        self.save_manifest(&manifest)?;
        self.write::<R>(records.len(), payload)?;
        Ok(record)
    }

    /// Merges `patch` into the record with the given id and returns the result.
    ///
    /// Returns `None` without writing anything if the id is absent.
    /// # Errors
    ///
    /// Returns a [`StoreError`] if loading or writing the collection fails.
    pub fn update<R: Record>(&mut self, id: RecordId, patch: R::Patch) -> StoreResult<Option<R>, P> {
        let mut records = self.list::<R>()?;
        let Some(record) = records.iter_mut().find(|record| record.id() == id) else {
            return Ok(None);
        };
        record.merge(patch);
        let updated = record.clone();

        self.save(&records)?;
        Ok(Some(updated))
    }

    /// Removes the record with the given id. Deleting an absent id is a no-op and writes nothing.
    /// # Errors
    ///
    /// Returns a [`StoreError`] if loading or writing the collection fails.
    pub fn delete<R: Record>(&mut self, id: RecordId) -> StoreResult<(), P> {
        let mut records = self.list::<R>()?;
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return Ok(());
        }
        self.save(&records)
    }

    /// Overwrites the collection with its seed table.
    ///
    /// This discards every stored record. It is meant for bootstrapping an empty
    /// backend; use on a populated collection is an explicit administrative action.
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be read or written.
    pub fn reset<R: Seeded>(&mut self) -> StoreResult<(), P> {
        let key = self.config.collection_key(R::COLLECTION)?;
        let populated = self
            .persistence
            .get(key)
            .map_err(StoreError::Persistence)?
            .is_some_and(|payload| !payload.trim().is_empty());
        if populated {
            warn!(collection = R::COLLECTION, "Resetting a populated collection to its seed table");
        }

        let seed = R::seed(self.clock.now());
        info!(collection = R::COLLECTION, records = seed.len(), "Seeding collection");

        // Seed ids count as issued, so deleting a seed record never frees its id.
        if let Some(max_seed) = seed.iter().map(|record| record.id()).max() {
            let mut manifest = self.load_manifest()?;
            manifest.record(R::COLLECTION, max_seed);
            self.save_manifest(&manifest)?;
        }
        self.save(&seed)
    }

    /// Seeds every collection whose key has never been written.
    ///
    /// A collection that exists but is empty is left alone. Does nothing when
    /// [`StoreConfig::seed_on_bootstrap`] is off. Returns the seeded collection names.
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be read or written.
    pub fn bootstrap(&mut self) -> StoreResult<Vec<&'static str>, P> {
        let mut seeded = Vec::new();
        if !self.config.seed_on_bootstrap {
            debug!("Bootstrap seeding disabled");
            return Ok(seeded);
        }
        if self.bootstrap_collection::<User>()? {
            seeded.push(User::COLLECTION);
        }
        if self.bootstrap_collection::<Product>()? {
            seeded.push(Product::COLLECTION);
        }
        Ok(seeded)
    }

    fn bootstrap_collection<R: Seeded>(&mut self) -> StoreResult<bool, P> {
        let key = self.config.collection_key(R::COLLECTION)?;
        if self
            .persistence
            .get(key)
            .map_err(StoreError::Persistence)?
            .is_some()
        {
            return Ok(false);
        }
        self.reset::<R>()?;
        Ok(true)
    }

    /// Dashboard counters over both collections, with "today" taken from the store clock.
    /// # Errors
    ///
    /// Returns a [`StoreError`] if either collection cannot be loaded.
    pub fn statistics(&self) -> StoreResult<Statistics, P> {
        let users = self.list::<User>()?;
        let products = self.list::<Product>()?;
        Ok(Statistics::compute(&users, &products, self.clock.now()))
    }

    /// The `limit` most recently created records, newest first.
    ///
    /// The order of records created at the exact same instant is unspecified.
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the collection cannot be loaded.
    pub fn recent<R: Record>(&self, limit: usize) -> StoreResult<Vec<R>, P> {
        Ok(most_recent(self.list::<R>()?, limit))
    }

    /// [`Self::recent`] with the configured limit.
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the collection cannot be loaded.
    pub fn recent_default<R: Record>(&self) -> StoreResult<Vec<R>, P> {
        self.recent(self.config.recent_limit)
    }

    fn save<R: Record>(&mut self, records: &[R]) -> StoreResult<(), P> {
        let payload = self.encode_checked(records)?;
        self.write::<R>(records.len(), payload)
    }

    /// Encodes a whole collection and decodes the result once.
    ///
    /// A payload that would not read back is rejected before anything is written;
    /// JSON, for one, turns non-finite floats into `null`.
    fn encode_checked<R: Record>(&self, records: &[R]) -> StoreResult<String, P> {
        let payload = self
            .codec
            .encode(records)
            .map_err(|e| StoreError::codec(R::COLLECTION, e))?;
        self.codec
            .decode::<R>(&payload)
            .map_err(|e| StoreError::codec(R::COLLECTION, e))?;
        Ok(payload)
    }

    fn write<R: Record>(&mut self, records: usize, payload: String) -> StoreResult<(), P> {
        let key = self.config.collection_key(R::COLLECTION)?;
        debug!(
            collection = R::COLLECTION,
            key,
            records,
            bytes = payload.len(),
            "Writing collection"
        );
        self.persistence
            .set(key, payload)
            .map_err(StoreError::Persistence)
    }

    fn load_manifest(&self) -> StoreResult<Manifest, P> {
        let key = &self.config.manifest_key;
        let Some(payload) = self.persistence.get(key).map_err(StoreError::Persistence)? else {
            return Ok(Manifest::default());
        };
        let entries: Vec<SequenceEntry> = self
            .codec
            .decode(&payload)
            .map_err(|e| StoreError::codec(key, e))?;
        Ok(Manifest::from_entries(entries))
    }

    fn save_manifest(&mut self, manifest: &Manifest) -> StoreResult<(), P> {
        let key = &self.config.manifest_key;
        let payload = self
            .codec
            .encode(manifest.entries())
            .map_err(|e| StoreError::codec(key, e))?;
        self.persistence
            .set(key, payload)
            .map_err(StoreError::Persistence)
    }
}
