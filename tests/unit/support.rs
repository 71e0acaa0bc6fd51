// tests/unit/support.rs
//! In-memory `ContentSource` stub and fixture builders.
//!
//! The stub counts calls per operation so tests can assert the
//! fetch-count properties of the engine (no fetch for embedded
//! content, exactly one fetch per extension).

use async_trait::async_trait;
use spacetraveling::{
    AppError, ContentDetail, ContentSection, ContentSource, ContentSummary, Page, QueryOptions,
    RichTextBlock, Slug,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn slug(value: &str) -> Slug {
    Slug::parse(value).expect("test slug should be valid")
}

pub fn summary(slug_value: &str) -> ContentSummary {
    ContentSummary {
        slug: slug(slug_value),
        first_publication_date: Some(
            chrono::DateTime::parse_from_rfc3339("2021-03-15T10:00:00+00:00").unwrap(),
        ),
        title: format!("Title of {}", slug_value),
        subtitle: format!("Subtitle of {}", slug_value),
        author: "Ana".to_string(),
    }
}

pub fn section(heading: &str, body_texts: &[&str]) -> ContentSection {
    ContentSection {
        heading: heading.to_string(),
        body: body_texts
            .iter()
            .map(|text| RichTextBlock::paragraph(*text))
            .collect(),
    }
}

pub fn detail(slug_value: &str, sections: Vec<ContentSection>) -> ContentDetail {
    ContentDetail {
        slug: slug(slug_value),
        first_publication_date: Some(
            chrono::DateTime::parse_from_rfc3339("2021-03-15T10:00:00+00:00").unwrap(),
        ),
        banner_url: url::Url::parse("https://images.example/banner.png").unwrap(),
        title: format!("Title of {}", slug_value),
        author: "Ana".to_string(),
        sections,
    }
}

/// What the stub returns for one cursor value.
pub enum StubPage {
    Page(Page),
    TransportFailure,
}

#[derive(Default)]
pub struct StubSource {
    first_page: Option<Page>,
    pages_by_cursor: HashMap<String, StubPage>,
    details: HashMap<String, ContentDetail>,
    enumeration: Vec<Slug>,
    fail_gets: bool,
    pub query_calls: AtomicUsize,
    pub get_calls: AtomicUsize,
    pub enumerate_calls: AtomicUsize,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_first_page(mut self, page: Page) -> Self {
        self.first_page = Some(page);
        self
    }

    pub fn with_page(mut self, cursor: &str, page: Page) -> Self {
        self.pages_by_cursor
            .insert(cursor.to_string(), StubPage::Page(page));
        self
    }

    pub fn with_failing_page(mut self, cursor: &str) -> Self {
        self.pages_by_cursor
            .insert(cursor.to_string(), StubPage::TransportFailure);
        self
    }

    pub fn with_detail(mut self, detail: ContentDetail) -> Self {
        self.details.insert(detail.slug.as_str().to_string(), detail);
        self
    }

    pub fn with_enumeration(mut self, slugs: &[&str]) -> Self {
        self.enumeration = slugs.iter().map(|value| slug(value)).collect();
        self
    }

    pub fn failing_gets(mut self) -> Self {
        self.fail_gets = true;
        self
    }
}

#[async_trait]
impl ContentSource for StubSource {
    async fn query_by_type(
        &self,
        _doc_type: &str,
        options: QueryOptions,
    ) -> Result<Page, AppError> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        match &options.cursor {
            None => self
                .first_page
                .clone()
                .ok_or_else(|| AppError::MalformedResponse("no first page configured".to_string())),
            Some(cursor) => match self.pages_by_cursor.get(cursor.as_str()) {
                Some(StubPage::Page(page)) => Ok(page.clone()),
                Some(StubPage::TransportFailure) => Err(AppError::MalformedResponse(
                    "stub transport failure".to_string(),
                )),
                None => Err(AppError::MalformedResponse(format!(
                    "unknown cursor {}",
                    cursor
                ))),
            },
        }
    }

    async fn get_by_identifier(
        &self,
        _doc_type: &str,
        slug: &Slug,
    ) -> Result<Option<ContentDetail>, AppError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_gets {
            return Err(AppError::MalformedResponse(
                "stub transport failure".to_string(),
            ));
        }
        Ok(self.details.get(slug.as_str()).cloned())
    }

    async fn enumerate_all_identifiers(&self, _doc_type: &str) -> Result<Vec<Slug>, AppError> {
        self.enumerate_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.enumeration.clone())
    }
}
