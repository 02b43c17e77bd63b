//! File-based persistence backend for tally stores.
//!
//! Each key is stored as a separate file holding the encoded collection, so the
//! data directory stays human-readable: with the default codec, `users.csv` is a
//! spreadsheet of the user collection.
//!
//! # Example
//!
//! ```no_run
//! use tally::Store;
//! use tally_fs::FileStore;
//!
//! let file_store = FileStore::new("./data").expect("Failed to create storage");
//! let mut store = Store::new(file_store);
//! store.bootstrap().expect("Failed to seed collections");
//! ```

mod error;
mod filename;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tally::Persistence;
use tracing::{debug, trace};

pub use error::FileStoreError;
pub use filename::{decode_from_filename, encode_for_filename};

/// A file-based persistence backend.
///
/// Filenames are derived from percent-encoded keys plus an extension, `csv` by
/// default. The backend stores whatever text the store's codec produces, so a
/// store using `JsonCodec` should open its directory with
/// `FileStore::new(dir)?.with_extension("json")`.
/// Writes go to a temporary file that is then renamed over the target, so a
/// failed write leaves the previous payload in place.
#[derive(Debug)]
pub struct FileStore {
    data_dir: PathBuf,
    extension: String,
}

impl FileStore {
    /// The default file extension, matching the default CSV codec.
    pub const DEFAULT_EXTENSION: &'static str = "csv";
    const TEMP_EXTENSION: &'static str = "tmp";

    /// Creates a new `FileStore` instance at the specified directory.
    ///
    /// The directory will be created if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created due to insufficient
    /// permissions or other I/O issues.
    pub fn new(data_dir: impl Into<PathBuf>) -> io::Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        debug!(path = %data_dir.display(), "Opened file store");
        Ok(Self {
            data_dir,
            extension: Self::DEFAULT_EXTENSION.to_owned(),
        })
    }

    /// Uses `extension` (without the dot) for payload files.
    ///
    /// Files written under another extension are neither read nor listed.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The file holding the payload of `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", encode_for_filename(key), self.extension))
    }

    /// Keys currently stored, in sorted order. Files that are not tally payloads are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be listed.
    pub fn keys(&self) -> Result<Vec<String>, FileStoreError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.data_dir)? {
            let entry = entry?;
            if let Some(filename) = entry.file_name().to_str()
                && let Some(stem) = filename
                    .strip_suffix(self.extension.as_str())
                    .and_then(|rest| rest.strip_suffix('.'))
                && let Some(key) = decode_from_filename(stem)
            {
                keys.push(key);
            }
        }
        keys.sort_unstable();
        Ok(keys)
    }

    /// Deletes the payload of `key`; the next `get` returns `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn remove(&mut self, key: &str) -> Result<bool, FileStoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

impl Persistence for FileStore {
    type Error = FileStoreError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let file_path = self.path_for(key);
        trace!(key, path = %file_path.display(), "Reading payload");
        match fs::read_to_string(file_path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Err(FileStoreError::NotText {
                key: key.to_owned(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), Self::Error> {
        let file_path = self.path_for(key);
        let temp_path = file_path.with_extension(Self::TEMP_EXTENSION);
        debug!(key, bytes = value.len(), path = %file_path.display(), "Writing payload");

        let written = fs::write(&temp_path, value).and_then(|()| fs::rename(&temp_path, &file_path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        Ok(())
    }
}
