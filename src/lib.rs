// src/lib.rs
//! spacetraveling library — listing and detail rendering engine for a
//! Prismic-backed publishing site.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `CmsErrorCode`, `ValidationError`
//! - **Configuration** — `CommandLineInput`, `SiteConfig`
//! - **Domain model** — `ContentSummary`, `ContentDetail`, `Page`, `Cursor`
//! - **Pagination** — `AggregatedListing`, `ListingQuery`, `fetch_first_page`
//! - **Fallback rendering** — `RenderState`, `RenderFallbackController`
//! - **API client** — `ContentSource`, `CmsHttpClient`, wire parsers
//! - **Presentation** — `compose_listing_markdown`, `compose_detail_view`

mod api;
mod config;
mod constants;
mod error;
mod format;
mod listing;
mod model;
mod reading_time;
mod render;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, CmsErrorCode, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{parse_slug_argument, Command, CommandLineInput, SiteConfig};

// --- Domain Model ---
pub use crate::model::{
    ContentDetail, ContentSection, ContentSummary, Cursor, Page, RichTextBlock,
};
pub use crate::types::{AccessToken, Slug};

// --- Pagination ---
pub use crate::listing::{fetch_first_page, AggregatedListing, ListingQuery};

// --- Fallback Rendering ---
pub use crate::render::{RenderFallbackController, RenderState};

// --- Reading Time ---
pub use crate::reading_time::estimate;

// --- API Client ---
pub use crate::api::{
    responses::{
        parse_document_detail, parse_identifier_enumeration, parse_listing_page, parse_master_ref,
    },
    CmsHttpClient, ContentSource, QueryOptions,
};

// --- Presentation ---
pub use crate::format::{
    compose_detail_view, compose_listing_markdown, compose_post_markdown,
    format_publication_date, LOADING_PLACEHOLDER, NOT_FOUND_MESSAGE,
};

// --- Constants ---
pub use crate::constants::{
    ENUMERATION_PAGE_LIMIT, LISTING_ORDERINGS, LISTING_PAGE_SIZE, POSTS_DOCUMENT_TYPE,
    WORDS_PER_MINUTE,
};
