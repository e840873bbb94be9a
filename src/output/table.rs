//! Fixed-width table report
//!
//! Every cell is right-aligned in its column and truncated to the column
//! width, never wrapped:
//!
//! ```text
//! |                     Name  | Child? |     Match Type  |                     Match Values  |
//! --------------------------------------------------------------------------------------------
//! |                customer-a |    Yes |     cidr_blocks |                      192.0.2.0/24 |
//! ```

use super::types::ReportWriter;
use crate::decode::ApiVersion;
use crate::error::Result;
use crate::extract::Record;
use crate::pagination::ListingStats;
use std::io::Write;

/// One column of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Header text
    pub title: &'static str,
    /// Cell width in characters
    pub width: usize,
}

impl Column {
    /// Create a column
    pub const fn new(title: &'static str, width: usize) -> Self {
        Self { title, width }
    }
}

/// Columns of the managed-object report
pub const MANAGED_OBJECT_COLUMNS: [Column; 4] = [
    Column::new(" Name ", 25),
    Column::new("Child?", 6),
    Column::new(" Match Type ", 15),
    Column::new(" Match Values ", 33),
];

/// Width of the horizontal rules
pub const REPORT_WIDTH: usize = 92;

/// Width the summary label is right-aligned in
pub const SUMMARY_LABEL_WIDTH: usize = 80;

/// Label of the closing summary line
pub const SUMMARY_LABEL: &str = "SP REST API version:";

/// Text of the child column for child records
pub const CHILD_MARKER: &str = "Yes";

/// Truncate `value` to `width` characters and right-align it
pub fn fit(value: &str, width: usize) -> String {
    let truncated: String = value.chars().take(width).collect();
    format!("{truncated:>width$}")
}

/// Render one table line. Extra values past the last column are ignored.
pub fn render_row(columns: &[Column], values: &[&str]) -> String {
    let mut line = String::from("| ");
    for (column, value) in columns.iter().zip(values) {
        line.push_str(&fit(value, column.width));
        line.push_str(" | ");
    }
    line
}

/// A horizontal rule
pub fn rule(width: usize) -> String {
    "-".repeat(width)
}

/// The closing `SP REST API version:` line
pub fn summary_line(version: &ApiVersion) -> String {
    format!(
        "{:>width$} SP{}/APIv{}",
        SUMMARY_LABEL,
        version.sp_version,
        version.api_version,
        width = SUMMARY_LABEL_WIDTH
    )
}

/// Writes the managed-object report as a fixed-width table
#[derive(Debug)]
pub struct TableReport<W: Write> {
    out: W,
    columns: &'static [Column],
    width: usize,
}

impl<W: Write> TableReport<W> {
    /// Create a table report over `out` with the managed-object columns
    pub fn new(out: W) -> Self {
        Self {
            out,
            columns: &MANAGED_OBJECT_COLUMNS,
            width: REPORT_WIDTH,
        }
    }

    /// Borrow the underlying writer
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the report, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn header(&self) -> String {
        let titles: Vec<&str> = self.columns.iter().map(|c| c.title).collect();
        render_row(self.columns, &titles)
    }
}

impl<W: Write> ReportWriter for TableReport<W> {
    fn begin(&mut self) -> Result<()> {
        let header = self.header();
        writeln!(self.out, "{header}")?;
        writeln!(self.out, "{}", rule(self.width))?;
        self.out.flush()?;
        Ok(())
    }

    fn write_record(&mut self, record: &Record) -> Result<()> {
        let child = if record.is_child { CHILD_MARKER } else { "" };
        let line = render_row(
            self.columns,
            &[
                record.name.as_deref().unwrap_or_default(),
                child,
                record.match_type.as_deref().unwrap_or_default(),
                record.match_value.as_deref().unwrap_or_default(),
            ],
        );
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn end_page(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self, version: &ApiVersion, _stats: &ListingStats) -> Result<()> {
        writeln!(self.out, "{}", rule(self.width))?;
        writeln!(self.out, "{}", summary_line(version))?;
        self.out.flush()?;
        Ok(())
    }
}
