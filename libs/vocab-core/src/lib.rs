//! Core vocabulary trainer library used by the backend service and its tools.
//!
//! Provides:
//! - Shared types (Card, CardCandidate, WordEntry)
//! - Answer checking for test mode (normalization + synonyms)
//! - Least-seen card selection
//! - Word list parsing for bulk import

pub mod error;
pub mod matching;
pub mod selection;
pub mod types;
pub mod wordlist;

pub use error::{ImportError, Result};
pub use matching::{accepted_variants, check_answer, normalize, AnswerCheck, SYNONYM_DELIMITER};
pub use selection::{least_seen, pick_next, pick_next_with};
pub use types::{Card, CardCandidate, WordEntry, DEFAULT_CATEGORY};
pub use wordlist::{parse_word_list, WordList};
