// src/api/client.rs
//! HTTP implementation of [`ContentSource`] against a Prismic-style
//! REST search API.
//!
//! The client resolves the repository's master content ref once, then
//! issues `documents/search` queries against it. Pagination cursors
//! are the backend's `next_page` URLs, fetched verbatim — extending a
//! listing is exactly one request.

use super::responses::{
    parse_document_detail, parse_identifier_enumeration, parse_listing_page, parse_master_ref,
    ApiErrorBody,
};
use super::{ContentSource, QueryOptions};
use crate::config::SiteConfig;
use crate::constants::{ENUMERATION_PAGE_LIMIT, LISTING_ORDERINGS};
use crate::error::{AppError, CmsErrorCode};
use crate::model::{ContentDetail, Page};
use crate::types::{AccessToken, Slug};
use reqwest::Client;
use tokio::sync::OnceCell;
use url::Url;

/// A thin wrapper around a reqwest Client for the CMS search API.
pub struct CmsHttpClient {
    client: Client,
    /// Repository API root, e.g. `https://repo.cdn.prismic.io/api/v2`.
    endpoint: Url,
    access_token: Option<AccessToken>,
    master_ref: OnceCell<String>,
}

impl CmsHttpClient {
    pub fn new(config: &SiteConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(concat!("spacetraveling/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.api_endpoint.clone(),
            access_token: config.access_token.clone(),
            master_ref: OnceCell::new(),
        })
    }

    /// Resolves and caches the repository's master content ref.
    async fn master_ref(&self) -> Result<&str, AppError> {
        self.master_ref
            .get_or_try_init(|| async {
                log::debug!("resolving master ref from {}", self.endpoint);
                let body = self.get_text(self.endpoint.clone()).await?;
                parse_master_ref(&body)
            })
            .await
            .map(String::as_str)
    }

    /// Builds a `documents/search` URL with the given predicate.
    fn search_url(
        &self,
        reference: &str,
        predicate: &str,
        page_size: u32,
        orderings: &str,
    ) -> Result<Url, AppError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::MissingConfiguration(format!(
                    "repository endpoint {} cannot carry a path",
                    self.endpoint
                ))
            })?
            .pop_if_empty()
            .extend(["documents", "search"]);

        url.query_pairs_mut()
            .append_pair("ref", reference)
            .append_pair("q", predicate)
            .append_pair("pageSize", &page_size.to_string())
            .append_pair("orderings", orderings);
        Ok(url)
    }

    /// Attaches the configured access token to a request URL.
    ///
    /// Every request goes through here, including the ref-resolution
    /// call — a private repository rejects that one too. Cursor URLs
    /// may already carry the token backend-side, so an existing pair
    /// is left alone.
    fn with_access_token(&self, mut url: Url) -> Url {
        let Some(token) = &self.access_token else {
            return url;
        };
        let already_present = url.query_pairs().any(|(name, _)| name == "access_token");
        if !already_present {
            url.query_pairs_mut()
                .append_pair("access_token", token.as_str());
        }
        url
    }

    /// Performs a GET and returns the body, classifying non-success
    /// statuses into the CMS error vocabulary.
    async fn get_text(&self, url: Url) -> Result<String, AppError> {
        let url = self.with_access_token(url);
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let error_body: ApiErrorBody = serde_json::from_str(&body).unwrap_or_default();
            let code = CmsErrorCode::classify(status.as_u16(), &error_body.message);
            log::debug!(
                "CMS error {} ({} / {}): {}",
                status,
                code,
                error_body.error_type,
                error_body.message
            );
            return Err(AppError::CmsService {
                code,
                message: error_body.message,
                status: status.as_u16(),
            });
        }
        Ok(body)
    }
}

fn type_predicate(doc_type: &str) -> String {
    format!("[[at(document.type,\"{}\")]]", doc_type)
}

fn uid_predicate(doc_type: &str, slug: &Slug) -> String {
    format!("[[at(my.{}.uid,\"{}\")]]", doc_type, slug)
}

#[async_trait::async_trait]
impl ContentSource for CmsHttpClient {
    async fn query_by_type(&self, doc_type: &str, options: QueryOptions) -> Result<Page, AppError> {
        let url = match &options.cursor {
            // A cursor is a complete next_page URL with ref, query and
            // paging already baked in.
            Some(cursor) => Url::parse(cursor.as_str())?,
            None => {
                let reference = self.master_ref().await?;
                self.search_url(
                    reference,
                    &type_predicate(doc_type),
                    options.page_size,
                    &options.orderings,
                )?
            }
        };
        let body = self.get_text(url).await?;
        parse_listing_page(&body)
    }

    async fn get_by_identifier(
        &self,
        doc_type: &str,
        slug: &Slug,
    ) -> Result<Option<ContentDetail>, AppError> {
        let reference = self.master_ref().await?;
        let url = self.search_url(reference, &uid_predicate(doc_type, slug), 1, LISTING_ORDERINGS)?;
        match self.get_text(url).await {
            Ok(body) => parse_document_detail(&body),
            Err(AppError::CmsService { code, .. }) if code.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn enumerate_all_identifiers(&self, doc_type: &str) -> Result<Vec<Slug>, AppError> {
        let reference = self.master_ref().await?;
        let url = self.search_url(
            reference,
            &type_predicate(doc_type),
            ENUMERATION_PAGE_LIMIT,
            LISTING_ORDERINGS,
        )?;
        let body = self.get_text(url).await?;
        parse_identifier_enumeration(&body)
    }
}
