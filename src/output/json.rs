//! JSON lines report

use super::types::ReportWriter;
use crate::decode::ApiVersion;
use crate::error::Result;
use crate::extract::Record;
use crate::pagination::ListingStats;
use serde_json::json;
use std::io::Write;

/// Writes one JSON object per record and a final summary object
#[derive(Debug)]
pub struct JsonLinesReport<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesReport<W> {
    /// Create a JSON lines report over `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Borrow the underlying writer
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the report, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for JsonLinesReport<W> {
    fn begin(&mut self) -> Result<()> {
        Ok(())
    }

    fn write_record(&mut self, record: &Record) -> Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn end_page(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self, version: &ApiVersion, stats: &ListingStats) -> Result<()> {
        let summary = json!({
            "sp_version": version.sp_version,
            "api_version": version.api_version,
            "pages": stats.pages_fetched,
            "records": stats.records_emitted,
        });
        serde_json::to_writer(&mut self.out, &summary)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
