//! SQLite database operations

pub mod seed;

use std::str::FromStr;

use chrono::Utc;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Row, SqlitePool,
};
use vocab_core::DEFAULT_CATEGORY;

use crate::error::Result;
use crate::models::*;

/// Database wrapper with connection pool.
///
/// Every query checks a connection out of the pool for the duration of that
/// query only; the guard returns it on drop, whichever way the query ends.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to SQLite and create connection pool
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Each connection to `:memory:` opens its own empty database, so an
        // in-memory pool is pinned to one connection that never expires.
        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        let pool = pool_options.connect_with(options).await?;
        Ok(Self { pool })
    }

    /// Run database migrations and upgrade legacy schemas
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        self.ensure_pronunciation_column().await?;
        Ok(())
    }

    /// Add `cards.pronunciation` to databases created before it existed.
    ///
    /// Returns whether the column had to be added.
    pub async fn ensure_pronunciation_column(&self) -> Result<bool> {
        let columns: Vec<String> =
            sqlx::query_scalar("SELECT name FROM pragma_table_info('cards')")
                .fetch_all(&self.pool)
                .await?;

        if columns.iter().any(|c| c == "pronunciation") {
            return Ok(false);
        }

        sqlx::query("ALTER TABLE cards ADD COLUMN pronunciation TEXT")
            .execute(&self.pool)
            .await?;
        tracing::info!("Added pronunciation column to cards");
        Ok(true)
    }

    /// Get the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // === Card Repository ===

    /// Insert a single card and return its ID
    pub async fn insert_card(&self, entry: &WordEntry) -> Result<i64> {
        let category = if entry.category.is_empty() {
            DEFAULT_CATEGORY
        } else {
            entry.category.as_str()
        };

        let result = sqlx::query(
            r#"
            INSERT INTO cards (lt, en, category, pronunciation)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&entry.term)
        .bind(&entry.translation)
        .bind(category)
        .bind(entry.pronunciation.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Get card by ID
    pub async fn get_card(&self, card_id: i64) -> Result<Option<DbCard>> {
        let card = sqlx::query_as::<_, DbCard>(
            r#"
            SELECT id, lt, en, category, pronunciation
            FROM cards
            WHERE id = ?
            "#,
        )
        .bind(card_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card)
    }

    /// All cards in a category joined with their seen counts
    pub async fn get_category_candidates(&self, category: &str) -> Result<Vec<CardCandidate>> {
        let rows = sqlx::query_as::<_, DbCardWithProgress>(
            r#"
            SELECT c.id, c.lt, c.en, c.category, c.pronunciation,
                   COALESCE(p.seen_count, 0) AS seen_count
            FROM cards c
            LEFT JOIN progress p ON p.card_id = c.id
            WHERE c.category = ?
            ORDER BY c.id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(DbCardWithProgress::into_candidate).collect())
    }

    // === Category Repository ===

    /// Distinct categories in ascending (binary) order
    pub async fn list_categories(&self) -> Result<Vec<String>> {
        let categories = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM cards ORDER BY category ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Alphabetically first category, if any card exists
    pub async fn first_category(&self) -> Result<Option<String>> {
        let category = sqlx::query_scalar::<_, String>(
            "SELECT category FROM cards ORDER BY category ASC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    // === Progress Repository ===

    /// Record that a card was seen.
    ///
    /// Creates the progress row on first sight, otherwise increments it.
    /// Returns `None` when no card has this ID.
    pub async fn mark_seen(&self, card_id: i64) -> Result<Option<ProgressRecord>> {
        let record = sqlx::query_as::<_, ProgressRecord>(
            r#"
            INSERT INTO progress (card_id, seen_count, last_seen)
            SELECT id, 1, ? FROM cards WHERE id = ?
            ON CONFLICT (card_id) DO UPDATE SET
                seen_count = progress.seen_count + 1,
                last_seen = excluded.last_seen
            RETURNING card_id, seen_count, last_seen
            "#,
        )
        .bind(Utc::now())
        .bind(card_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Get progress for a card
    pub async fn get_progress(&self, card_id: i64) -> Result<Option<ProgressRecord>> {
        let record = sqlx::query_as::<_, ProgressRecord>(
            r#"
            SELECT card_id, seen_count, last_seen
            FROM progress
            WHERE card_id = ?
            "#,
        )
        .bind(card_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    // === Stats ===

    /// Card and seen counts, overall and for an optional category
    pub async fn get_stats(&self, category: Option<&str>) -> Result<StatsResponse> {
        let total_cards: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cards")
            .fetch_one(&self.pool)
            .await?;

        let unique_seen_total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM progress p
            JOIN cards c ON c.id = p.card_id
            WHERE p.seen_count > 0
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        let (total_in_category, unique_seen_in_category) = match category {
            Some(category) => {
                let row = sqlx::query(
                    r#"
                    SELECT
                        COUNT(c.id) AS total,
                        COUNT(CASE WHEN p.seen_count > 0 THEN 1 END) AS seen
                    FROM cards c
                    LEFT JOIN progress p ON p.card_id = c.id
                    WHERE c.category = ?
                    "#,
                )
                .bind(category)
                .fetch_one(&self.pool)
                .await?;

                (row.get::<i64, _>("total"), row.get::<i64, _>("seen"))
            }
            None => (0, 0),
        };

        Ok(StatsResponse {
            category: category.map(str::to_string),
            total_in_category,
            unique_seen_in_category,
            unique_seen_total,
            total_cards,
        })
    }

    // === Bulk Import ===

    /// Insert starter cards when the store is empty. Returns how many were added.
    pub async fn seed_if_empty(&self, entries: &[WordEntry]) -> Result<usize> {
        let mut tx = self.pool.begin().await?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cards")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            return Ok(0);
        }

        for entry in entries {
            sqlx::query("INSERT INTO cards (lt, en, category, pronunciation) VALUES (?, ?, ?, ?)")
                .bind(&entry.term)
                .bind(&entry.translation)
                .bind(&entry.category)
                .bind(entry.pronunciation.as_deref())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(entries.len())
    }

    /// Upsert word entries keyed on (term, category) in one transaction.
    ///
    /// Existing cards get their translation and pronunciation refreshed when
    /// they differ. `skipped` is left at zero for the caller to fill in.
    pub async fn import_words(&self, entries: &[WordEntry]) -> Result<ImportSummary> {
        let mut summary = ImportSummary::default();
        let mut tx = self.pool.begin().await?;

        for entry in entries {
            let pronunciation = entry.pronunciation.as_deref().unwrap_or("");

            let existing = sqlx::query(
                r#"
                SELECT id, en, COALESCE(pronunciation, '') AS pronunciation
                FROM cards
                WHERE lt = ? AND category = ?
                "#,
            )
            .bind(&entry.term)
            .bind(&entry.category)
            .fetch_optional(&mut *tx)
            .await?;

            let Some(row) = existing else {
                sqlx::query("INSERT INTO cards (lt, en, category, pronunciation) VALUES (?, ?, ?, ?)")
                    .bind(&entry.term)
                    .bind(&entry.translation)
                    .bind(&entry.category)
                    .bind(entry.pronunciation.as_deref())
                    .execute(&mut *tx)
                    .await?;
                summary.inserted += 1;
                continue;
            };

            let card_id: i64 = row.get("id");
            let existing_en: String = row.get("en");
            let existing_pronunciation: String = row.get("pronunciation");

            if existing_en == entry.translation && existing_pronunciation == pronunciation {
                summary.unchanged += 1;
                continue;
            }

            sqlx::query("UPDATE cards SET en = ?, pronunciation = ? WHERE id = ?")
                .bind(&entry.translation)
                .bind(entry.pronunciation.as_deref())
                .bind(card_id)
                .execute(&mut *tx)
                .await?;
            summary.updated += 1;
        }

        tx.commit().await?;
        Ok(summary)
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
