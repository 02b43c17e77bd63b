use serde::{Serialize, de::DeserializeOwned};

use crate::CodecError;

/// A trait for turning a whole collection into a textual payload and back.
pub trait Codec {
    /// Encodes every row of a collection into one payload.
    ///
    /// # Errors
    ///
    /// Returns an error if any row cannot be serialized.
    fn encode<R: Serialize>(&self, rows: &[R]) -> Result<String, CodecError>;

    /// Decodes a payload produced by [`Codec::encode`].
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is corrupt or does not match `R`.
    fn decode<R: DeserializeOwned>(&self, payload: &str) -> Result<Vec<R>, CodecError>;
}
