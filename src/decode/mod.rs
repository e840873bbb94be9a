//! Response decoder module
//!
//! Turns the raw bytes of one page into a typed [`PageDocument`].
//!
//! # Overview
//!
//! Decoding is all-or-nothing: a page either parses as JSON or the run ends.
//! Shape problems inside a well-formed page (missing `data`, `links`, `meta`)
//! are not decode errors; they are handled by the extractor and the driver.

mod decoder;
mod types;

pub use decoder::JsonDecoder;
pub use types::{ApiVersion, PageDocument, RecordSet};

#[cfg(test)]
mod tests;
