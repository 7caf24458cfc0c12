//! Request bodies and sample data for integration tests.

use serde_json::json;

/// Create a mark-seen request body.
pub fn seen_request(card_id: i64) -> serde_json::Value {
    json!({ "card_id": card_id })
}

/// Create a check-answer request body.
pub fn check_request(card_id: i64, answer: &str) -> serde_json::Value {
    json!({ "card_id": card_id, "answer": answer })
}

/// Sample word list in import format.
pub fn sample_word_list() -> String {
    json!([
        { "lt": "labas", "en": "hello (informal)", "category": "01_greetings", "pronunciation": "LAH-bahs" },
        { "lt": "sveiki", "en": "hello (formal)|hi", "category": "01_greetings" },
        { "lt": "vienas", "en": "one", "category": "02_numbers", "pronunciation": "VYEH-nahs" },
        { "lt": "", "en": "missing term", "category": "02_numbers" }
    ])
    .to_string()
}
