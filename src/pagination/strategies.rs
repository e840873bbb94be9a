//! Next-link pagination
//!
//! The listing API embeds the next page's URL in the response body:
//!
//! ```json
//! { "data": [...], "links": { "next": "https://.../managed_objects/?page=2" } }
//! ```

use super::types::{NextPage, PaginationState};
use crate::decode::PageDocument;
use crate::error::{Error, Result};
use tracing::warn;

/// Follows `links.next` until it is absent or null
#[derive(Debug, Clone, Copy, Default)]
pub struct LinksNextPaginator;

impl LinksNextPaginator {
    /// Create a new next-link paginator
    pub fn new() -> Self {
        Self
    }

    /// Decide where to go after `document`.
    ///
    /// A missing `links` field is a shape warning and ends pagination
    /// normally. A next link pointing at a page already fetched in this run
    /// is an error.
    pub fn process_response(
        &self,
        document: &PageDocument,
        state: &mut PaginationState,
    ) -> Result<NextPage> {
        if !document.has_links() {
            warn!("The 'links' element in the returned JSON is null");
            state.add_warning();
            return Ok(NextPage::Done);
        }

        match document.next_link().filter(|next| !next.is_empty()) {
            Some(next) if state.has_visited(next) => Err(Error::RepeatedCursor {
                url: next.to_string(),
            }),
            Some(next) => Ok(NextPage::with_url(next)),
            None => Ok(NextPage::Done),
        }
    }
}
