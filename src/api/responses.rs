// src/api/responses.rs
//! Wire shapes for the CMS search API and their conversion into the
//! domain model.
//!
//! The system does not define or validate the content schema — it
//! trusts the shape the backend returns. Display fields default to
//! empty when absent; only the identifier is hard-required, because
//! everything downstream keys on it.

use crate::error::AppError;
use crate::model::{ContentDetail, ContentSection, ContentSummary, Cursor, Page, RichTextBlock};
use crate::types::Slug;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use url::Url;

/// `GET {endpoint}/api/v2` — repository metadata with content refs.
#[derive(Debug, Deserialize)]
pub struct RepositoryResponse {
    pub refs: Vec<RefEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RefEntry {
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(rename = "isMasterRef", default)]
    pub is_master_ref: bool,
}

/// `GET .../documents/search` — one page of results.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub results: Vec<DocumentEnvelope>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentEnvelope {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub first_publication_date: Option<String>,
    #[serde(default)]
    pub data: DocumentData,
}

#[derive(Debug, Default, Deserialize)]
pub struct DocumentData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub banner: Option<BannerRef>,
    #[serde(default)]
    pub content: Vec<SectionData>,
}

#[derive(Debug, Deserialize)]
pub struct BannerRef {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct SectionData {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub body: Vec<RichTextBlock>,
}

/// Error body the API attaches to non-success statuses.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, rename = "type")]
    pub error_type: String,
    #[serde(default, alias = "error")]
    pub message: String,
}

/// Extracts the master content ref from a repository response.
pub fn parse_master_ref(body: &str) -> Result<String, AppError> {
    let repository: RepositoryResponse = serde_json::from_str(body)?;
    repository
        .refs
        .into_iter()
        .find(|entry| entry.is_master_ref)
        .map(|entry| entry.reference)
        .ok_or_else(|| AppError::MalformedResponse("repository has no master ref".to_string()))
}

/// Converts a search response into a listing page.
pub fn parse_listing_page(body: &str) -> Result<Page, AppError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    let items = response
        .results
        .into_iter()
        .map(summary_from_document)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Page {
        items,
        next_cursor: response.next_page.map(Cursor::new),
    })
}

/// Converts a by-identifier search response into a document, or `None`
/// when the backend matched nothing.
pub fn parse_document_detail(body: &str) -> Result<Option<ContentDetail>, AppError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    match response.results.into_iter().next() {
        Some(envelope) => Ok(Some(detail_from_document(envelope)?)),
        None => Ok(None),
    }
}

/// Extracts the identifier of every document in a search response.
pub fn parse_identifier_enumeration(body: &str) -> Result<Vec<Slug>, AppError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    response
        .results
        .into_iter()
        .map(|envelope| slug_from_uid(envelope.uid))
        .collect()
}

fn summary_from_document(envelope: DocumentEnvelope) -> Result<ContentSummary, AppError> {
    Ok(ContentSummary {
        slug: slug_from_uid(envelope.uid)?,
        first_publication_date: parse_timestamp(envelope.first_publication_date)?,
        title: envelope.data.title,
        subtitle: envelope.data.subtitle,
        author: envelope.data.author,
    })
}

fn detail_from_document(envelope: DocumentEnvelope) -> Result<ContentDetail, AppError> {
    let slug = slug_from_uid(envelope.uid)?;
    let banner = envelope
        .data
        .banner
        .ok_or_else(|| AppError::MalformedResponse(format!("document {} has no banner", slug)))?;
    let banner_url = Url::parse(&banner.url)?;

    let sections = envelope
        .data
        .content
        .into_iter()
        .map(|section| ContentSection {
            heading: section.heading,
            body: section.body,
        })
        .collect();

    Ok(ContentDetail {
        slug,
        first_publication_date: parse_timestamp(envelope.first_publication_date)?,
        banner_url,
        title: envelope.data.title,
        author: envelope.data.author,
        sections,
    })
}

fn slug_from_uid(uid: Option<String>) -> Result<Slug, AppError> {
    let uid =
        uid.ok_or_else(|| AppError::MalformedResponse("document without uid".to_string()))?;
    Ok(Slug::parse(&uid)?)
}

/// The backend emits offsets both as `+00:00` and as `+0000`; strict
/// RFC 3339 parsing only accepts the former.
fn parse_timestamp(raw: Option<String>) -> Result<Option<DateTime<FixedOffset>>, AppError> {
    raw.map(|value| {
        DateTime::parse_from_rfc3339(&value)
            .or_else(|_| DateTime::parse_from_str(&value, "%Y-%m-%dT%H:%M:%S%z"))
            .map_err(|err| {
                AppError::MalformedResponse(format!(
                    "bad publication timestamp {:?}: {}",
                    value, err
                ))
            })
    })
    .transpose()
}
