// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # SP managed-object listing
//!
//! Fetches the managed-object collection of an SP REST API page by page and
//! renders each record as a row of a fixed-width table.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sp_mo_listing::http::{HttpClient, HttpClientConfig};
//! use sp_mo_listing::output::TableReport;
//! use sp_mo_listing::pagination::ListingDriver;
//!
//! #[tokio::main]
//! async fn main() -> sp_mo_listing::Result<()> {
//!     let config = HttpClientConfig::builder()
//!         .credential("X-Arbux-APIToken:...")
//!         .trust_anchor("./certfile")
//!         .build();
//!     let driver = ListingDriver::new(HttpClient::with_config(config)?);
//!
//!     let mut report = TableReport::new(std::io::stdout());
//!     driver
//!         .run("https://leader.example.com/api/sp/managed_objects/?perPage=15", &mut report)
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────── ListingDriver ────────────────────────┐
//! │  FETCHING ──► DECODING ──► EXTRACTING ──► ADVANCING ──► DONE  │
//! │      ▲                                        │               │
//! │      └──────────────── links.next ────────────┘               │
//! └───────────────────────────────────────────────────────────────┘
//!      │              │              │              │
//! ┌─────────┐   ┌───────────┐  ┌───────────┐  ┌────────────┐
//! │  HTTP   │   │  Decode   │  │  Extract  │  │   Output   │
//! ├─────────┤   ├───────────┤  ├───────────┤  ├────────────┤
//! │ Pinned  │   │ JSON      │  │ Record    │  │ Table      │
//! │ TLS     │   │ RecordSet │  │ fields    │  │ JSON lines │
//! │ ByteSink│   │ links/meta│  │           │  │            │
//! └─────────┘   └───────────┘  └───────────┘  └────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// HTTP transport with pinned trust and streamed bodies
pub mod http;

/// Page decoding
pub mod decode;

/// Record extraction
pub mod extract;

/// Next-link pagination and the listing driver
pub mod pagination;

/// Table and JSON lines reports
pub mod output;

/// Listing configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

pub use config::ListingConfig;
pub use extract::Record;
pub use pagination::{ListingDriver, ListingStats};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
