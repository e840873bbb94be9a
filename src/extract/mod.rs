//! Record extraction module
//!
//! Pulls `name`, `parent_name`, `match_type` and `match` out of each record
//! of a decoded page. Every attribute is optional; a record is only dropped
//! when it has no `attributes` object at all.

mod extractor;
mod types;

pub use extractor::extract_records;
pub use types::{Extraction, Record};
