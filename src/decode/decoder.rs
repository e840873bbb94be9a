//! JSON page decoder

use super::types::PageDocument;
use crate::error::{Error, Result};
use serde_json::Value;

/// Decodes one page's accumulated bytes into a [`PageDocument`]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// Create a new JSON decoder
    pub fn new() -> Self {
        Self
    }

    /// Decode a page body.
    ///
    /// Empty input is rejected with [`Error::EmptyPayload`] before parsing;
    /// syntax errors become [`Error::Decode`] with serde's line/column text.
    pub fn decode(&self, body: &[u8]) -> Result<PageDocument> {
        if body.is_empty() {
            return Err(Error::EmptyPayload);
        }

        let root = self.decode_raw(body)?;
        Ok(PageDocument::from_value(root))
    }

    /// Decode a page body into an untyped JSON value
    pub fn decode_raw(&self, body: &[u8]) -> Result<Value> {
        serde_json::from_slice(body).map_err(|e| Error::decode(e.to_string()))
    }
}
