// src/format.rs
//! Markdown composition for the listing and detail views.
//!
//! Thin presentation layer: consumes the aggregated listing and the
//! render state, produces display text. No fetch logic lives here.

use crate::listing::AggregatedListing;
use crate::model::ContentDetail;
use crate::reading_time;
use crate::render::RenderState;
use chrono::{DateTime, FixedOffset};

/// Text shown while an on-demand page is still being produced.
pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// Text shown when the requested identifier resolves to nothing.
pub const NOT_FOUND_MESSAGE: &str = "Post not found.";

/// Display form of a nullable publication timestamp.
pub fn format_publication_date(date: Option<&DateTime<FixedOffset>>) -> String {
    match date {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => "draft".to_string(),
    }
}

/// Composes the listing view: one entry per summary, in fetch order,
/// plus a trailing marker when more pages exist.
pub fn compose_listing_markdown(listing: &AggregatedListing) -> String {
    let mut output = String::new();
    for summary in listing.items() {
        output.push_str(&format!("# {}\n", summary.title));
        output.push_str(&format!("{}\n", summary.subtitle));
        output.push_str(&format!(
            "{} · {}\n\n",
            format_publication_date(summary.first_publication_date.as_ref()),
            summary.author
        ));
    }
    if listing.has_more() {
        output.push_str("_More posts available._\n");
    }
    output
}

/// Composes a full post page: banner, byline with reading time, then
/// each section as a heading plus its body paragraphs.
pub fn compose_post_markdown(detail: &ContentDetail, minutes: u32) -> String {
    let mut output = String::new();
    output.push_str(&format!("![banner]({})\n\n", detail.banner_url));
    output.push_str(&format!("# {}\n", detail.title));
    output.push_str(&format!(
        "{} · {} · {} min\n",
        format_publication_date(detail.first_publication_date.as_ref()),
        detail.author,
        minutes
    ));

    for section in &detail.sections {
        output.push_str(&format!("\n## {}\n", section.heading));
        for block in &section.body {
            let text = block.plain_text();
            if !text.is_empty() {
                output.push_str(&format!("\n{}\n", text));
            }
        }
    }
    output
}

/// Renders a detail-page request outcome.
///
/// The match is exhaustive on purpose: every rendering state has a
/// defined appearance, so "still loading" checks don't leak into
/// callers.
pub fn compose_detail_view(state: &RenderState) -> String {
    match state {
        RenderState::Ready(detail) => {
            compose_post_markdown(detail, reading_time::estimate(detail))
        }
        RenderState::Pending => LOADING_PLACEHOLDER.to_string(),
        RenderState::NotFound => NOT_FOUND_MESSAGE.to_string(),
    }
}
