//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Re-export shared types from vocab-core
pub use vocab_core::{AnswerCheck, Card, CardCandidate, WordEntry};

// === Database Entity Types ===

/// Card stored in SQLite
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCard {
    pub id: i64,
    pub lt: String,
    pub en: String,
    pub category: String,
    pub pronunciation: Option<String>,
}

/// Card joined with its progress row (absent progress reads as zero)
#[derive(Debug, Clone, FromRow)]
pub struct DbCardWithProgress {
    pub id: i64,
    pub lt: String,
    pub en: String,
    pub category: String,
    pub pronunciation: Option<String>,
    pub seen_count: i64,
}

impl DbCardWithProgress {
    /// Convert to a selection candidate
    pub fn into_candidate(self) -> CardCandidate {
        CardCandidate {
            card: Card {
                id: self.id,
                term: self.lt,
                translation: self.en,
                category: self.category,
                pronunciation: self.pronunciation,
            },
            seen_count: self.seen_count,
        }
    }
}

/// Progress record, at most one per card
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProgressRecord {
    pub card_id: i64,
    pub seen_count: i64,
    pub last_seen: Option<DateTime<Utc>>,
}

/// Counts produced by a bulk import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub inserted: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

// === API Request/Response Types ===

/// Optional `?category=` filter. An empty value counts as absent.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

impl CategoryQuery {
    pub fn selected(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Card payload for GET /api/next
#[derive(Debug, Serialize)]
pub struct NextCardResponse {
    pub id: i64,
    pub lt: String,
    pub en: String,
    pub category: String,
    pub pronunciation: String,
    pub seen_count: i64,
}

impl From<CardCandidate> for NextCardResponse {
    fn from(candidate: CardCandidate) -> Self {
        let CardCandidate { card, seen_count } = candidate;
        Self {
            id: card.id,
            lt: card.term,
            en: card.translation,
            category: card.category,
            pronunciation: card.pronunciation.unwrap_or_default(),
            seen_count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SeenRequest {
    #[serde(default)]
    pub card_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub card_id: Option<i64>,
    #[serde(default)]
    pub answer: Option<String>,
}

/// Response for POST /api/check
pub type CheckResponse = AnswerCheck;

/// Response for GET /api/stats
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsResponse {
    pub category: Option<String>,
    pub total_in_category: i64,
    pub unique_seen_in_category: i64,
    pub unique_seen_total: i64,
    pub total_cards: i64,
}
