// src/api/mod.rs
//! CMS backend access.
//!
//! `ContentSource` is the single seam between the engine and the
//! backend; the HTTP implementation lives in `client`, the wire shapes
//! and their conversion into the domain model in `responses`.

pub mod client;
pub mod responses;

pub use client::CmsHttpClient;

use crate::error::AppError;
use crate::model::{ContentDetail, Cursor, Page};
use crate::types::Slug;

/// Parameters for a listing query.
#[derive(Debug, Clone)]
pub struct QueryOptions {
    pub page_size: u32,
    pub orderings: String,
    /// When set, the query continues a previous one from this cursor;
    /// the other fields are then already baked into it backend-side.
    pub cursor: Option<Cursor>,
}

/// Retrieves published content from the CMS backend.
///
/// The engine never talks HTTP directly; everything goes through this
/// trait so the pagination and fallback logic can be driven by an
/// in-memory source in tests.
#[async_trait::async_trait]
pub trait ContentSource {
    /// Fetches one page of summaries for a document type.
    async fn query_by_type(
        &self,
        doc_type: &str,
        options: QueryOptions,
    ) -> Result<Page, AppError>;

    /// Fetches a single document by its identifier.
    ///
    /// `Ok(None)` is the backend's not-found signal; it is an expected
    /// outcome, not an error path.
    async fn get_by_identifier(
        &self,
        doc_type: &str,
        slug: &Slug,
    ) -> Result<Option<ContentDetail>, AppError>;

    /// Enumerates all known identifiers for a document type.
    ///
    /// Single unpaginated fetch, used at build time to decide which
    /// detail pages exist up front. A repository holding more documents
    /// than the backend's single-page limit is silently truncated by
    /// the backend; this is a known limitation, not handled here.
    async fn enumerate_all_identifiers(&self, doc_type: &str) -> Result<Vec<Slug>, AppError>;
}
