//! Pagination module
//!
//! Follows the `links.next` URL embedded in each page until the API stops
//! providing one.
//!
//! # Overview
//!
//! - [`LinksNextPaginator`] decides, from one decoded page, whether and where
//!   to go next
//! - [`ListingDriver`] runs the sequential fetch/decode/extract/advance loop
//!   and streams records into a report

mod driver;
mod strategies;
mod types;

pub use driver::ListingDriver;
pub use strategies::LinksNextPaginator;
pub use types::{ListingStats, NextPage, PaginationState};
