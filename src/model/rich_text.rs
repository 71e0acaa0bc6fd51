// src/model/rich_text.rs
//! Opaque structured text blocks.
//!
//! The backend's rich text format carries block types and styling
//! spans, but nothing in this system interprets them: the only
//! projection the model exposes is the plain text, which feeds the
//! reading-time estimate and the rendered body.

use serde::Deserialize;

/// One structured text block from a document body.
///
/// Deserializes directly from the wire shape
/// `{ "type": ..., "text": ..., "spans": [...] }`. Spans are retained
/// untouched so the block round-trips without this crate defining the
/// rich text schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RichTextBlock {
    #[serde(rename = "type", default)]
    block_type: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    spans: Vec<serde_json::Value>,
}

impl RichTextBlock {
    /// Builds a plain paragraph block, mainly for tests and fixtures.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            block_type: "paragraph".to_string(),
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Plain-text projection of the block.
    ///
    /// Blocks without a text payload (images, embeds) project to the
    /// empty string.
    pub fn plain_text(&self) -> &str {
        &self.text
    }
}
