//! Pagination types
//!
//! Defines the page-advance result, the per-run pagination state, and the
//! statistics a listing run reports.

use std::collections::HashSet;

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch this URL next
    Continue {
        /// The next page's URL, taken from `links.next`
        url: String,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with a new URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::Continue { url: url.into() }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Tracks pagination state during one listing run
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Pages fetched so far
    pub page: u32,
    /// Every URL fetched in this run
    pub visited: HashSet<String>,
    /// Shape warnings raised while advancing
    pub warnings: usize,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `url` is about to be fetched
    pub fn begin_page(&mut self, url: &str) {
        self.page += 1;
        self.visited.insert(url.to_string());
    }

    /// Whether `url` was already fetched in this run
    pub fn has_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Count a shape warning
    pub fn add_warning(&mut self) {
        self.warnings += 1;
    }
}

/// Statistics from a listing run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingStats {
    /// Total pages fetched
    pub pages_fetched: usize,
    /// Rows emitted to the report
    pub records_emitted: usize,
    /// Records dropped for lacking an `attributes` object
    pub records_skipped: usize,
    /// Shape warnings logged (missing `data`, missing `links`)
    pub warnings: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl ListingStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page
    pub fn add_page(&mut self) {
        self.pages_fetched += 1;
    }

    /// Add emitted records
    pub fn add_records(&mut self, count: usize) {
        self.records_emitted += count;
    }

    /// Add skipped records
    pub fn add_skipped(&mut self, count: usize) {
        self.records_skipped += count;
    }

    /// Add a warning
    pub fn add_warning(&mut self) {
        self.warnings += 1;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}
