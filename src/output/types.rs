//! Report writer abstraction

use crate::decode::ApiVersion;
use crate::error::Result;
use crate::extract::Record;
use crate::pagination::ListingStats;
use serde::{Deserialize, Serialize};

/// Output format
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width text table
    #[default]
    Table,
    /// One JSON object per record, then a summary object
    Json,
}

/// Receives the output of a listing run.
///
/// Call order is `begin`, then for every page any number of `write_record`
/// followed by one `end_page`, then `finish` only if the run succeeded.
pub trait ReportWriter {
    /// Emit anything that precedes the first record (table header)
    fn begin(&mut self) -> Result<()>;

    /// Emit one record
    fn write_record(&mut self, record: &Record) -> Result<()>;

    /// A page is complete; rows written so far must reach the output
    fn end_page(&mut self) -> Result<()>;

    /// Emit the closing summary
    fn finish(&mut self, version: &ApiVersion, stats: &ListingStats) -> Result<()>;
}
