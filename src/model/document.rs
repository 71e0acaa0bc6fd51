// src/model/document.rs
//! Summary and detail representations of a published document.

use super::RichTextBlock;
use crate::types::Slug;
use chrono::{DateTime, FixedOffset};
use url::Url;

/// Lightweight listing-view representation of a document.
///
/// The publication timestamp is nullable: unpublished drafts surface
/// through preview refs without one.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentSummary {
    pub slug: Slug,
    pub first_publication_date: Option<DateTime<FixedOffset>>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

/// Full document representation for the detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDetail {
    pub slug: Slug,
    pub first_publication_date: Option<DateTime<FixedOffset>>,
    pub banner_url: Url,
    pub title: String,
    pub author: String,
    pub sections: Vec<ContentSection>,
}

/// One titled section of a document body.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentSection {
    pub heading: String,
    pub body: Vec<RichTextBlock>,
}
