//! Record extraction from decoded pages

use super::types::{Extraction, Record};
use crate::decode::PageDocument;
use crate::error::{Error, Result};
use tracing::debug;

/// Extract every record of a page in document order.
///
/// A page without `data` yields [`Error::MissingField`], which is a shape
/// warning for that page only. Elements without an `attributes` object are
/// skipped and counted.
pub fn extract_records(document: &PageDocument) -> Result<Extraction> {
    let data = document
        .data()
        .ok_or_else(|| Error::missing_field("data"))?;

    let mut extraction = Extraction {
        records: Vec::with_capacity(data.len()),
        skipped: 0,
    };

    for (index, value) in data.iter().enumerate() {
        match Record::from_value(value) {
            Some(record) => extraction.records.push(record),
            None => {
                debug!("Skipping data[{}]: no 'attributes' object", index);
                extraction.skipped += 1;
            }
        }
    }

    Ok(extraction)
}
