//! Category and card selection API tests.

mod common;

use std::collections::HashSet;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;

use common::TestContext;

/// Categories are deduplicated and sorted.
#[tokio::test]
async fn test_categories_sorted_and_distinct() {
    let ctx = TestContext::new().await;
    ctx.add_card("bet", "but", "b").await;
    ctx.add_card("ir", "and", "a").await;
    ctx.add_card("ar", "or", "a").await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/categories").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["categories"], serde_json::json!(["a", "b"]));
}

/// Empty store lists no categories.
#[tokio::test]
async fn test_categories_empty_store() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/categories").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["categories"].as_array().unwrap().is_empty());
}

/// Category order is ordinal, so uppercase sorts before lowercase.
#[tokio::test]
async fn test_categories_ordinal_order() {
    let ctx = TestContext::new().await;
    ctx.add_card("x", "x", "basics").await;
    ctx.add_card("y", "y", "Animals").await;
    let server = TestServer::new(ctx.router()).unwrap();

    let body: serde_json::Value = server.get("/api/categories").await.json();
    assert_eq!(body["categories"], serde_json::json!(["Animals", "basics"]));
}

/// Empty store has no next card.
#[tokio::test]
async fn test_next_empty_store() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/next").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No cards found in database.");
}

/// Unknown category has no next card.
#[tokio::test]
async fn test_next_unknown_category() {
    let ctx = TestContext::with_starter_cards().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .get("/api/next")
        .add_query_param("category", "99_missing")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No cards found for category: 99_missing");
}

/// Without a category the first one alphabetically is used.
#[tokio::test]
async fn test_next_defaults_to_first_category() {
    let ctx = TestContext::with_starter_cards().await;
    let server = TestServer::new(ctx.router()).unwrap();

    for _ in 0..10 {
        let response = server.get("/api/next").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["category"], "01_greetings");
    }
}

/// An empty category parameter behaves like no parameter.
#[tokio::test]
async fn test_next_empty_category_param() {
    let ctx = TestContext::with_starter_cards().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/next").add_query_param("category", "").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["category"], "01_greetings");
}

/// Next card payload carries every field, with seen_count.
#[tokio::test]
async fn test_next_payload_shape() {
    let ctx = TestContext::new().await;
    let id = ctx.add_card("taip", "yes", "03_basics").await;
    ctx.mark_seen(id, 2).await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .get("/api/next")
        .add_query_param("category", "03_basics")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], id);
    assert_eq!(body["lt"], "taip");
    assert_eq!(body["en"], "yes");
    assert_eq!(body["category"], "03_basics");
    assert_eq!(body["pronunciation"], "");
    assert_eq!(body["seen_count"], 2);
}

/// Selection stays inside the requested category.
#[tokio::test]
async fn test_next_respects_category() {
    let ctx = TestContext::with_starter_cards().await;
    let server = TestServer::new(ctx.router()).unwrap();

    for _ in 0..20 {
        let body: serde_json::Value = server
            .get("/api/next")
            .add_query_param("category", "03_basics")
            .await
            .json();
        assert_eq!(body["category"], "03_basics");
    }
}

/// The least-seen card is always chosen.
#[tokio::test]
async fn test_next_prefers_least_seen() {
    let ctx = TestContext::new().await;
    let a = ctx.add_card("a", "a", "c").await;
    let b = ctx.add_card("b", "b", "c").await;
    let c = ctx.add_card("c", "c", "c").await;
    ctx.mark_seen(a, 3).await;
    ctx.mark_seen(c, 1).await;
    let server = TestServer::new(ctx.router()).unwrap();

    for _ in 0..20 {
        let body: serde_json::Value = server.get("/api/next").await.json();
        assert_eq!(body["id"], b);
        assert_eq!(body["seen_count"], 0);
    }
}

/// Ties at the minimum are all reachable.
#[tokio::test]
async fn test_next_rotates_among_ties() {
    let ctx = TestContext::new().await;
    let a = ctx.add_card("a", "a", "c").await;
    let b = ctx.add_card("b", "b", "c").await;
    let seen = ctx.add_card("z", "z", "c").await;
    ctx.mark_seen(seen, 1).await;
    let server = TestServer::new(ctx.router()).unwrap();

    let mut picked = HashSet::new();
    for _ in 0..200 {
        let body: serde_json::Value = server.get("/api/next").await.json();
        picked.insert(body["id"].as_i64().unwrap());
    }

    assert_eq!(picked, HashSet::from([a, b]));
}

/// Selecting a card does not count as seeing it.
#[tokio::test]
async fn test_next_has_no_side_effects() {
    let ctx = TestContext::new().await;
    let id = ctx.add_card("ne", "no", "03_basics").await;
    let server = TestServer::new(ctx.router()).unwrap();

    for _ in 0..3 {
        server.get("/api/next").await.assert_status_ok();
    }

    assert!(ctx.progress(id).await.is_none());
}

/// Health check responds.
#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_text("OK");
}
