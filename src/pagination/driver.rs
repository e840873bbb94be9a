//! Listing driver
//!
//! Runs the fetch → decode → extract → advance loop one page at a time.
//! Nothing is fetched until the previous page's next link has been read,
//! and each page's body and decoded tree are dropped before the next fetch.

use super::strategies::LinksNextPaginator;
use super::types::{ListingStats, NextPage, PaginationState};
use crate::decode::{JsonDecoder, PageDocument};
use crate::error::{Error, Result};
use crate::extract::extract_records;
use crate::http::{ByteSink, PageFetcher};
use crate::output::ReportWriter;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Where the driver is in the page loop
#[derive(Debug)]
enum DriverState {
    Fetching { url: String },
    Decoding { body: ByteSink },
    Extracting { document: PageDocument },
    Advancing { document: PageDocument },
    Done { last: PageDocument },
}

/// Drives a paginated listing into a [`ReportWriter`]
#[derive(Debug)]
pub struct ListingDriver<F> {
    fetcher: F,
    decoder: JsonDecoder,
    paginator: LinksNextPaginator,
}

impl<F: PageFetcher> ListingDriver<F> {
    /// Create a driver that fetches pages through `fetcher`
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            decoder: JsonDecoder::new(),
            paginator: LinksNextPaginator::new(),
        }
    }

    /// Get the fetcher
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// List every page starting at `start_url`.
    ///
    /// The report header is written before the first fetch, rows are flushed
    /// page by page, and the summary is written only when pagination ends
    /// normally. Any fatal error returns immediately with the rows of earlier
    /// pages already written.
    pub async fn run(&self, start_url: &str, report: &mut dyn ReportWriter) -> Result<ListingStats> {
        let start = Instant::now();
        let mut pagination = PaginationState::new();
        let mut stats = ListingStats::new();

        report.begin()?;

        let mut state = DriverState::Fetching {
            url: start_url.to_string(),
        };

        let last = loop {
            state = match state {
                DriverState::Fetching { url } => {
                    pagination.begin_page(&url);
                    debug!("Fetching page {}: {}", pagination.page, url);

                    let body = self.fetcher.fetch(&url).await?;
                    stats.add_page();
                    if body.is_empty() {
                        return Err(Error::empty_response(url));
                    }
                    DriverState::Decoding { body }
                }
                DriverState::Decoding { body } => {
                    let document = self.decoder.decode(body.as_bytes())?;
                    DriverState::Extracting { document }
                }
                DriverState::Extracting { document } => {
                    match extract_records(&document) {
                        Ok(extraction) => {
                            for record in &extraction.records {
                                report.write_record(record)?;
                            }
                            debug!(
                                "Page {}: {} records, {} skipped",
                                pagination.page,
                                extraction.records.len(),
                                extraction.skipped
                            );
                            stats.add_records(extraction.records.len());
                            stats.add_skipped(extraction.skipped);
                        }
                        Err(e) if !e.is_fatal() => {
                            warn!("{}", e);
                            stats.add_warning();
                        }
                        Err(e) => return Err(e),
                    }
                    report.end_page()?;
                    DriverState::Advancing { document }
                }
                DriverState::Advancing { document } => {
                    match self.paginator.process_response(&document, &mut pagination)? {
                        NextPage::Continue { url } => DriverState::Fetching { url },
                        NextPage::Done => DriverState::Done { last: document },
                    }
                }
                DriverState::Done { last } => break last,
            };
        };

        stats.warnings += pagination.warnings;
        stats.set_duration(start.elapsed().as_millis() as u64);

        report.finish(&last.api_version(), &stats)?;

        info!(
            "Listed {} records from {} pages in {}ms",
            stats.records_emitted, stats.pages_fetched, stats.duration_ms
        );
        Ok(stats)
    }
}
