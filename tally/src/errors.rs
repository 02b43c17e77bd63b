use core::fmt::Debug;

use thiserror::Error;

/// Errors that can occur while interacting with the store.
///
/// A record that is not found is not an error; lookups and updates return `None`.
/// Everything here is a persistence failure the store does not recover from: the
/// operation is abandoned and the collection keeps its last persisted state.
#[derive(Debug, Error)]
pub enum StoreError<E: Debug> {
    /// The persistence backend failed to read or write a payload.
    #[error("Persistence error: {0}")]
    Persistence(E),
    /// A collection payload could not be encoded or decoded.
    #[error("Codec error in collection `{collection}`: {source}")]
    Codec {
        collection: String,
        #[source]
        source: CodecError,
    },
    /// The id sequence of a collection has no next value.
    #[error("Failed to issue a new id for collection `{collection}`")]
    IdExhausted { collection: String },
    /// A collection resolves to a key the store cannot use for it.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl<E: Debug> StoreError<E> {
    pub(crate) fn codec(collection: &str, source: CodecError) -> Self {
        StoreError::Codec {
            collection: collection.to_owned(),
            source,
        }
    }
}

/// Errors raised while encoding or decoding a collection payload.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// The encoded CSV bytes were not valid UTF-8.
    #[error("Encoded payload is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Errors raised while loading a [`StoreConfig`](crate::StoreConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid store configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Collection keys must be distinct and non-empty, got `{0}`")]
    InvalidKey(String),
    #[error("Collection `{collection}` resolves to the reserved sequence table key `{key}`")]
    ReservedKey { collection: String, key: String },
}
