//! Answer checking for test mode.

use serde::{Deserialize, Serialize};

/// Separator between accepted synonyms in a stored translation.
pub const SYNONYM_DELIMITER: char = '|';

/// Result of checking a typed answer against a card's translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCheck {
    /// Whether the answer matched one of the accepted variants.
    pub is_correct: bool,
    /// The stored translation, verbatim, with every synonym.
    pub correct_answer: String,
}

/// Check a typed answer against a stored translation.
pub fn check_answer(answer: &str, translation: &str) -> AnswerCheck {
    let given = normalize(answer);
    let is_correct = accepted_variants(translation).any(|variant| normalize(variant) == given);

    AnswerCheck {
        is_correct,
        correct_answer: translation.to_string(),
    }
}

/// Split a stored translation into its accepted variants, in stored order.
pub fn accepted_variants(translation: &str) -> impl Iterator<Item = &str> {
    translation.split(SYNONYM_DELIMITER)
}

/// Normalize text for comparison: trim, lowercase, collapse inner whitespace.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
