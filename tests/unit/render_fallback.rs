// tests/unit/render_fallback.rs
//! Static/fallback rendering state machine.

use super::support::{detail, section, slug, StubSource};
use pretty_assertions::assert_eq;
use spacetraveling::{RenderFallbackController, RenderState};
use std::sync::atomic::Ordering;

#[tokio::test]
async fn prerendered_identifiers_resolve_without_network() {
    let source = StubSource::new()
        .with_enumeration(&["first-post", "second-post"])
        .with_detail(detail("first-post", vec![section("Intro", &["hello"])]))
        .with_detail(detail("second-post", vec![]));

    let controller = RenderFallbackController::prerender(&source, "posts")
        .await
        .unwrap();
    assert_eq!(source.enumerate_calls.load(Ordering::SeqCst), 1);

    let fetches_after_build = source.get_calls.load(Ordering::SeqCst);
    let state = controller.resolve(&slug("first-post"), &source).await;
    match state {
        RenderState::Ready(found) => assert_eq!(found.slug, slug("first-post")),
        other => panic!("expected Ready, got {:?}", other),
    }
    // Embedded at build time: resolving touched no network.
    assert_eq!(source.get_calls.load(Ordering::SeqCst), fetches_after_build);
}

#[tokio::test]
async fn initial_state_is_ready_only_for_known_identifiers() {
    let source = StubSource::new()
        .with_enumeration(&["known"])
        .with_detail(detail("known", vec![]));
    let controller = RenderFallbackController::prerender(&source, "posts")
        .await
        .unwrap();

    assert!(matches!(
        controller.initial_state(&slug("known")),
        RenderState::Ready(_)
    ));
    assert_eq!(controller.initial_state(&slug("unknown")), RenderState::Pending);
}

#[tokio::test]
async fn unknown_identifier_resolves_on_demand() {
    // Published after the build: absent from the enumeration but
    // fetchable.
    let late = detail("late-post", vec![section("News", &["fresh"])]);
    let source = StubSource::new().with_detail(late.clone());
    let controller = RenderFallbackController::prerender(&source, "posts")
        .await
        .unwrap();

    let state = controller.resolve(&slug("late-post"), &source).await;
    assert_eq!(state, RenderState::Ready(late));
}

#[tokio::test]
async fn missing_identifier_resolves_to_not_found() {
    let source = StubSource::new();
    let controller = RenderFallbackController::prerender(&source, "posts")
        .await
        .unwrap();

    let state = controller.resolve(&slug("no-such-post"), &source).await;
    assert_eq!(state, RenderState::NotFound);
}

#[tokio::test]
async fn transport_failure_keeps_the_request_pending() {
    let controller = RenderFallbackController::from_prerendered("posts", vec![]);
    let source = StubSource::new().failing_gets();

    let state = controller.resolve(&slug("flaky"), &source).await;
    assert_eq!(state, RenderState::Pending);
}

#[tokio::test]
async fn enumeration_order_is_preserved_for_path_generation() {
    let source = StubSource::new()
        .with_enumeration(&["newest", "older", "oldest"])
        .with_detail(detail("newest", vec![]))
        .with_detail(detail("older", vec![]))
        .with_detail(detail("oldest", vec![]));
    let controller = RenderFallbackController::prerender(&source, "posts")
        .await
        .unwrap();

    let known: Vec<&str> = controller
        .known_identifiers()
        .iter()
        .map(|s| s.as_str())
        .collect();
    assert_eq!(known, vec!["newest", "older", "oldest"]);
}

#[tokio::test]
async fn document_vanishing_between_enumeration_and_embed_falls_back() {
    let source = StubSource::new()
        .with_enumeration(&["stable", "ghost"])
        .with_detail(detail("stable", vec![]));
    let controller = RenderFallbackController::prerender(&source, "posts")
        .await
        .unwrap();

    // Enumerated but never embedded: treated like any unknown slug.
    assert_eq!(controller.initial_state(&slug("ghost")), RenderState::Pending);
    let state = controller.resolve(&slug("ghost"), &source).await;
    assert_eq!(state, RenderState::NotFound);
}
