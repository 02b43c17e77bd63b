use std::io;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Codec, CodecError};

/// CSV codec: a header row of field names followed by one row per record.
///
/// An empty collection encodes to the empty string. Empty cells decode to `None`
/// for optional fields, so an optional string set to `""` reads back as `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvCodec;

impl Codec for CsvCodec {
    fn encode<R: Serialize>(&self, rows: &[R]) -> Result<String, CodecError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(true)
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(Vec::new());

        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush().map_err(csv::Error::from)?;

        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(io::Error::other(e.to_string())))?;

        Ok(String::from_utf8(bytes)?)
    }

    fn decode<R: DeserializeOwned>(&self, payload: &str) -> Result<Vec<R>, CodecError> {
        if payload.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(payload.as_bytes());

        let rows = reader.deserialize().collect::<Result<Vec<R>, _>>()?;
        Ok(rows)
    }
}

/// JSON codec: the collection as one JSON array.
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<R: Serialize>(&self, rows: &[R]) -> Result<String, CodecError> {
        Ok(serde_json::to_string(rows)?)
    }

    fn decode<R: DeserializeOwned>(&self, payload: &str) -> Result<Vec<R>, CodecError> {
        if payload.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(payload)?)
    }
}
