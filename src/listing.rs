// src/listing.rs
//! Incremental pagination merge engine for the listing page.
//!
//! The listing starts from a build-time first page and grows by one
//! backend page per `extend` call. Every transition is a pure
//! old-state → new-state value; nothing is mutated in place, so a
//! failed fetch leaves the caller's state exactly as it was.

use crate::api::{ContentSource, QueryOptions};
use crate::constants::{LISTING_ORDERINGS, LISTING_PAGE_SIZE, POSTS_DOCUMENT_TYPE};
use crate::error::AppError;
use crate::model::{ContentSummary, Cursor, Page};

/// Query shape shared by the first page and every extension.
#[derive(Debug, Clone)]
pub struct ListingQuery {
    pub doc_type: String,
    pub page_size: u32,
    pub orderings: String,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            doc_type: POSTS_DOCUMENT_TYPE.to_string(),
            page_size: LISTING_PAGE_SIZE,
            orderings: LISTING_ORDERINGS.to_string(),
        }
    }
}

/// Fetches the initial page of the listing (the build-time query).
pub async fn fetch_first_page<S>(source: &S, query: &ListingQuery) -> Result<Page, AppError>
where
    S: ContentSource + ?Sized,
{
    source
        .query_by_type(
            &query.doc_type,
            QueryOptions {
                page_size: query.page_size,
                orderings: query.orderings.clone(),
                cursor: None,
            },
        )
        .await
}

/// Accumulated listing state: every page fetched so far, in fetch
/// order, plus the latest cursor.
///
/// The concatenation is append-only and each page's internal order is
/// preserved; ordering correctness is delegated entirely to the
/// backend's declared ordering. No deduplication is performed — the
/// backend's cursor contract guarantees disjoint pages, and if that
/// contract were ever broken (concurrent publication mid-pagination)
/// duplicates would appear in the listing.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedListing {
    items: Vec<ContentSummary>,
    next_cursor: Option<Cursor>,
}

impl AggregatedListing {
    /// Seeds the listing from the build-time first page.
    pub fn from_first_page(page: Page) -> Self {
        Self {
            items: page.items,
            next_cursor: page.next_cursor,
        }
    }

    /// All summaries fetched so far, in fetch order.
    pub fn items(&self) -> &[ContentSummary] {
        &self.items
    }

    pub fn next_cursor(&self) -> Option<&Cursor> {
        self.next_cursor.as_ref()
    }

    /// Whether a further page exists; the view uses this to decide
    /// whether to offer "load more".
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }

    /// Fetches the next page and returns the extended listing.
    ///
    /// Issues exactly one fetch against `source`. Fails with
    /// [`AppError::NoMorePages`] when the cursor is exhausted — callers
    /// must check [`has_more`](Self::has_more) first. On fetch failure
    /// the error propagates and `self` is untouched; there is no
    /// partial merge.
    ///
    /// Overlapping `extend` calls on the same state are not serialized
    /// here: each call returns its own next-state snapshot, and
    /// last-to-settle wins. Callers wanting one in-flight extension at
    /// a time must gate the trigger themselves.
    pub async fn extend<S>(&self, source: &S, query: &ListingQuery) -> Result<Self, AppError>
    where
        S: ContentSource + ?Sized,
    {
        let cursor = self.next_cursor.as_ref().ok_or(AppError::NoMorePages)?;

        let page = source
            .query_by_type(
                &query.doc_type,
                QueryOptions {
                    page_size: query.page_size,
                    orderings: query.orderings.clone(),
                    cursor: Some(cursor.clone()),
                },
            )
            .await?;

        let mut items = self.items.clone();
        items.extend(page.items);
        log::debug!(
            "listing extended to {} entries, more pages: {}",
            items.len(),
            page.next_cursor.is_some()
        );

        Ok(Self {
            items,
            next_cursor: page.next_cursor,
        })
    }
}
