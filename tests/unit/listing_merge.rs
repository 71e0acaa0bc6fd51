// tests/unit/listing_merge.rs
//! Pagination merge engine properties.

use super::support::{summary, StubSource};
use pretty_assertions::assert_eq;
use spacetraveling::{
    fetch_first_page, AggregatedListing, AppError, Cursor, ListingQuery, Page,
};
use std::sync::atomic::Ordering;

fn slugs_of(listing: &AggregatedListing) -> Vec<&str> {
    listing
        .items()
        .iter()
        .map(|item| item.slug.as_str())
        .collect()
}

#[tokio::test]
async fn merge_appends_pages_in_fetch_order_until_exhaustion() {
    let source = StubSource::new()
        .with_first_page(Page {
            items: vec![summary("p1"), summary("p2"), summary("p3")],
            next_cursor: Some(Cursor::new("page2")),
        })
        .with_page(
            "page2",
            Page {
                items: vec![summary("p4"), summary("p5")],
                next_cursor: None,
            },
        );
    let query = ListingQuery::default();

    let first = fetch_first_page(&source, &query).await.unwrap();
    let listing = AggregatedListing::from_first_page(first);
    assert!(listing.has_more());

    let extended = listing.extend(&source, &query).await.unwrap();
    assert_eq!(slugs_of(&extended), vec!["p1", "p2", "p3", "p4", "p5"]);
    assert_eq!(extended.next_cursor(), None);
    assert!(!extended.has_more());

    // Cursor exhausted: further extension is a caller error.
    let err = extended.extend(&source, &query).await.unwrap_err();
    assert!(matches!(err, AppError::NoMorePages));
    assert_eq!(extended.items().len(), 5);
}

#[tokio::test]
async fn extend_without_cursor_issues_no_fetch() {
    let source = StubSource::new();
    let listing = AggregatedListing::from_first_page(Page {
        items: vec![summary("p1")],
        next_cursor: None,
    });

    let err = listing.extend(&source, &ListingQuery::default()).await.unwrap_err();
    assert!(matches!(err, AppError::NoMorePages));
    assert_eq!(source.query_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn each_extension_is_exactly_one_fetch() {
    let source = StubSource::new()
        .with_first_page(Page {
            items: vec![summary("p1")],
            next_cursor: Some(Cursor::new("page2")),
        })
        .with_page(
            "page2",
            Page {
                items: vec![summary("p2")],
                next_cursor: Some(Cursor::new("page3")),
            },
        )
        .with_page(
            "page3",
            Page {
                items: vec![summary("p3")],
                next_cursor: None,
            },
        );
    let query = ListingQuery::default();

    let listing = AggregatedListing::from_first_page(fetch_first_page(&source, &query).await.unwrap());
    assert_eq!(source.query_calls.load(Ordering::SeqCst), 1);

    let listing = listing.extend(&source, &query).await.unwrap();
    assert_eq!(source.query_calls.load(Ordering::SeqCst), 2);

    let listing = listing.extend(&source, &query).await.unwrap();
    assert_eq!(source.query_calls.load(Ordering::SeqCst), 3);

    // Final cursor is the last fetched page's cursor; order is the
    // concatenation of every page's items in call order.
    assert_eq!(slugs_of(&listing), vec!["p1", "p2", "p3"]);
    assert_eq!(listing.next_cursor(), None);
}

#[tokio::test]
async fn failed_extension_leaves_state_unchanged() {
    let source = StubSource::new().with_failing_page("page2");
    let listing = AggregatedListing::from_first_page(Page {
        items: vec![summary("p1"), summary("p2")],
        next_cursor: Some(Cursor::new("page2")),
    });
    let before = listing.clone();

    let err = listing.extend(&source, &ListingQuery::default()).await.unwrap_err();
    assert!(!matches!(err, AppError::NoMorePages));

    // No partial merge: the old state is byte-for-byte what it was and
    // can be retried.
    assert_eq!(listing, before);
    assert!(listing.has_more());
}
