//! Growable byte sink for streamed response bodies
//!
//! Accumulates the chunks of a single page's response body into one
//! contiguous buffer. A sink is created fresh for every page and never
//! shared between pages.

use crate::error::{Error, Result};
use bytes::Bytes;

/// Append-only buffer for one page's response bytes
#[derive(Debug, Default)]
pub struct ByteSink {
    buf: Vec<u8>,
}

impl ByteSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and return the number of bytes accepted.
    ///
    /// Zero-length chunks are accepted and return 0. If the backing storage
    /// cannot grow, nothing is written and `Error::OutOfMemory` is returned.
    pub fn append(&mut self, chunk: &[u8]) -> Result<usize> {
        self.buf
            .try_reserve(chunk.len())
            .map_err(|_| Error::OutOfMemory {
                requested: chunk.len(),
            })?;
        self.buf.extend_from_slice(chunk);
        Ok(chunk.len())
    }

    /// Number of bytes accumulated so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether no bytes have been accumulated
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// View the accumulated bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the sink, returning its content
    pub fn into_bytes(self) -> Bytes {
        Bytes::from(self.buf)
    }
}
