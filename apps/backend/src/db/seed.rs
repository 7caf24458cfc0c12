//! Starter deck inserted into an empty store.

use vocab_core::WordEntry;

/// Five starter cards across two categories.
pub fn starter_cards() -> Vec<WordEntry> {
    vec![
        WordEntry::new("labas", "hello (informal)", "01_greetings", Some("LAH-bahs")),
        WordEntry::new("ačiū", "thank you|thanks", "01_greetings", Some("AH-choo")),
        WordEntry::new("prašau", "please / you're welcome", "01_greetings", Some("PRAH-shau")),
        WordEntry::new("taip", "yes", "03_basics", Some("tahp")),
        WordEntry::new("ne", "no", "03_basics", Some("neh")),
    ]
}
