//! Output module
//!
//! Renders extracted records for the user.
//!
//! # Overview
//!
//! This module provides:
//! - The [`ReportWriter`] trait the listing driver streams records into
//! - A fixed-width table report (the default)
//! - A JSON lines report for machine consumption
//!
//! Both writers flush at every page boundary, so rows of completed pages are
//! visible even if a later page fails.

mod json;
mod table;
mod types;

pub use json::JsonLinesReport;
pub use table::{
    fit, render_row, rule, summary_line, Column, TableReport, CHILD_MARKER,
    MANAGED_OBJECT_COLUMNS, REPORT_WIDTH, SUMMARY_LABEL, SUMMARY_LABEL_WIDTH,
};
pub use types::{OutputFormat, ReportWriter};
