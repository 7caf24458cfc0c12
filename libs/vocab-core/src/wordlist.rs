//! Word list parser for bulk import.
//!
//! # Format
//! ```json
//! [
//!   { "lt": "labas", "en": "hello (informal)", "category": "01_greetings", "pronunciation": "LAH-bahs" },
//!   { "lt": "ačiū", "en": "thank you|thanks", "category": "01_greetings" }
//! ]
//! ```
//!
//! Fields are trimmed. Entries missing `lt`, `en` or `category` are skipped
//! and counted rather than failing the whole list.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ImportError, Result};
use crate::types::WordEntry;

/// Parsed word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    pub entries: Vec<WordEntry>,
    /// Entries dropped because a required field was missing or empty.
    pub skipped: usize,
}

#[derive(Debug, Deserialize)]
struct RawWord {
    #[serde(default)]
    lt: Option<String>,
    #[serde(default)]
    en: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    pronunciation: Option<String>,
}

/// Parse a JSON word list.
pub fn parse_word_list(content: &str) -> Result<WordList> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Array(items) = value else {
        return Err(ImportError::NotAnArray);
    };

    let mut list = WordList::default();
    for item in items {
        match serde_json::from_value::<RawWord>(item).ok().and_then(into_entry) {
            Some(entry) => list.entries.push(entry),
            None => list.skipped += 1,
        }
    }

    Ok(list)
}

fn into_entry(raw: RawWord) -> Option<WordEntry> {
    let term = trimmed(raw.lt)?;
    let translation = trimmed(raw.en)?;
    let category = trimmed(raw.category)?;

    Some(WordEntry {
        term,
        translation,
        category,
        pronunciation: trimmed(raw.pronunciation),
    })
}

fn trimmed(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
