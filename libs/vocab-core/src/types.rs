//! Core types for the vocabulary trainer.

use serde::{Deserialize, Serialize};

/// Category assigned to cards created without one.
pub const DEFAULT_CATEGORY: &str = "01_greetings";

/// A vocabulary entry.
///
/// `translation` may hold several accepted answers joined by `|`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub term: String,
    pub translation: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
}

/// A card joined with its progress, as seen by the selection engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCandidate {
    pub card: Card,
    /// Times the card was marked seen; zero when no progress exists.
    pub seen_count: i64,
}

/// A card as it arrives from a word list, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub term: String,
    pub translation: String,
    pub category: String,
    pub pronunciation: Option<String>,
}

impl WordEntry {
    pub fn new(term: &str, translation: &str, category: &str, pronunciation: Option<&str>) -> Self {
        Self {
            term: term.to_string(),
            translation: translation.to_string(),
            category: category.to_string(),
            pronunciation: pronunciation.map(str::to_string),
        }
    }
}
