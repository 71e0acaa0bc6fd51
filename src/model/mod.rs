// src/model/mod.rs
//! Immutable domain model for CMS content.
//!
//! These types are what the rest of the system works with; the wire
//! shapes live in `api::responses` and are converted at the boundary.
//! Everything here is a plain value: once fetched, content is never
//! mutated in place.

mod document;
mod rich_text;

pub use document::{ContentDetail, ContentSection, ContentSummary};
pub use rich_text::RichTextBlock;

use std::fmt;

/// Opaque pagination token.
///
/// The backend hands this out with each page of results; it is passed
/// back verbatim to fetch the following page. `None` in the places a
/// cursor appears always means "no further pages".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One backend page of listing results.
///
/// `items` preserves the backend-provided order (publication time,
/// descending); `next_cursor` is `None` iff this is the last page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<ContentSummary>,
    pub next_cursor: Option<Cursor>,
}
