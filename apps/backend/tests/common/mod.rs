//! Common test utilities and fixtures for integration tests.
//!
//! Every `TestContext` owns a fresh in-memory SQLite database with the schema
//! applied, so tests need no external services and never share state.

pub mod fixtures;

use std::sync::Arc;

use axum::Router;

use vocab_trainer_backend::db::{seed, Database};
use vocab_trainer_backend::models::{ProgressRecord, WordEntry};
use vocab_trainer_backend::{build_router, AppState};

/// Test context containing database connection and router.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a context over an empty store.
    pub async fn new() -> Self {
        let db = Database::connect("sqlite::memory:", 1)
            .await
            .expect("Failed to open in-memory database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);
        let app = build_router(AppState { db: db.clone() });

        Self { db, app }
    }

    /// Create a context holding the starter deck.
    pub async fn with_starter_cards() -> Self {
        let ctx = Self::new().await;
        ctx.db
            .seed_if_empty(&seed::starter_cards())
            .await
            .expect("Failed to seed starter cards");
        ctx
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Insert a card and return its ID.
    pub async fn add_card(&self, term: &str, translation: &str, category: &str) -> i64 {
        self.db
            .insert_card(&WordEntry::new(term, translation, category, None))
            .await
            .expect("Failed to insert card")
    }

    /// Mark a card seen `times` times.
    pub async fn mark_seen(&self, card_id: i64, times: usize) {
        for _ in 0..times {
            self.db
                .mark_seen(card_id)
                .await
                .expect("Failed to mark seen")
                .expect("Card should exist");
        }
    }

    /// Get progress for a card.
    pub async fn progress(&self, card_id: i64) -> Option<ProgressRecord> {
        self.db.get_progress(card_id).await.ok().flatten()
    }
}
