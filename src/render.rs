// src/render.rs
//! Static/fallback rendering state machine for detail pages.
//!
//! At build time the controller enumerates every known identifier and
//! embeds the corresponding documents. At request time a known
//! identifier resolves immediately from the embedded content; an
//! unknown one starts out `Pending` and is fetched on demand.

use crate::api::ContentSource;
use crate::error::AppError;
use crate::model::ContentDetail;
use crate::types::Slug;
use std::collections::HashMap;

/// Rendering outcome for one requested detail page.
///
/// `Ready` and `NotFound` are terminal for the request. `Pending`
/// either resolves through [`RenderFallbackController::resolve`] or
/// stays pending when the fetch fails in transit (the host framework's
/// own retry/error page takes over from there).
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState {
    Ready(ContentDetail),
    Pending,
    NotFound,
}

/// Decides, per requested identifier, which rendering path applies.
pub struct RenderFallbackController {
    doc_type: String,
    enumeration: Vec<Slug>,
    prerendered: HashMap<Slug, ContentDetail>,
}

impl RenderFallbackController {
    /// Builds the controller at build time: one identifier enumeration,
    /// then one fetch per enumerated document to embed it statically.
    pub async fn prerender<S>(source: &S, doc_type: &str) -> Result<Self, AppError>
    where
        S: ContentSource + ?Sized,
    {
        let enumeration = source.enumerate_all_identifiers(doc_type).await?;
        log::info!(
            "prerendering {} documents of type {}",
            enumeration.len(),
            doc_type
        );

        let mut prerendered = HashMap::with_capacity(enumeration.len());
        for slug in &enumeration {
            match source.get_by_identifier(doc_type, slug).await? {
                Some(detail) => {
                    prerendered.insert(slug.clone(), detail);
                }
                // Enumerated a moment ago but gone now; the document
                // will fall back to on-demand resolution and NotFound.
                None => log::warn!("enumerated document {} no longer resolves", slug),
            }
        }

        Ok(Self {
            doc_type: doc_type.to_string(),
            enumeration,
            prerendered,
        })
    }

    /// Builds a controller directly from already-embedded content.
    pub fn from_prerendered(doc_type: &str, documents: Vec<ContentDetail>) -> Self {
        let enumeration = documents.iter().map(|d| d.slug.clone()).collect();
        let prerendered = documents.into_iter().map(|d| (d.slug.clone(), d)).collect();
        Self {
            doc_type: doc_type.to_string(),
            enumeration,
            prerendered,
        }
    }

    /// The build-time path enumeration, in backend order.
    pub fn known_identifiers(&self) -> &[Slug] {
        &self.enumeration
    }

    /// State a request starts in, before any on-demand work.
    ///
    /// Known-at-build identifiers are `Ready` immediately, with no
    /// network fetch; everything else renders a loading placeholder.
    pub fn initial_state(&self, slug: &Slug) -> RenderState {
        match self.prerendered.get(slug) {
            Some(detail) => RenderState::Ready(detail.clone()),
            None => RenderState::Pending,
        }
    }

    /// Resolves a requested identifier to its terminal state where
    /// possible.
    ///
    /// Embedded documents short-circuit without touching the network.
    /// For the rest, one on-demand fetch decides: found → `Ready`,
    /// not found → `NotFound`. A transport failure keeps the request
    /// `Pending` — no retry policy lives here.
    pub async fn resolve<S>(&self, slug: &Slug, source: &S) -> RenderState
    where
        S: ContentSource + ?Sized,
    {
        if let Some(detail) = self.prerendered.get(slug) {
            return RenderState::Ready(detail.clone());
        }

        match source.get_by_identifier(&self.doc_type, slug).await {
            Ok(Some(detail)) => RenderState::Ready(detail),
            Ok(None) => RenderState::NotFound,
            Err(err) => {
                log::warn!("on-demand fetch for {} failed: {}", slug, err);
                RenderState::Pending
            }
        }
    }
}
