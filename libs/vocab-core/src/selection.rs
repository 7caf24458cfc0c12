//! Least-seen card selection.
//!
//! Selection runs in two phases: narrow the candidates to those sharing the
//! minimum `seen_count`, then pick one of them uniformly at random. Cards that
//! have been practiced less always win, and ties never settle into a fixed
//! rotation.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::types::CardCandidate;

/// Candidates sharing the minimum `seen_count`, in their original order.
pub fn least_seen(candidates: &[CardCandidate]) -> Vec<&CardCandidate> {
    let Some(min) = candidates.iter().map(|c| c.seen_count).min() else {
        return Vec::new();
    };

    candidates.iter().filter(|c| c.seen_count == min).collect()
}

/// Pick the next card using the thread-local RNG.
pub fn pick_next(candidates: &[CardCandidate]) -> Option<&CardCandidate> {
    pick_next_with(candidates, &mut rand::rng())
}

/// Pick the next card using the given RNG.
pub fn pick_next_with<'a, R: Rng + ?Sized>(
    candidates: &'a [CardCandidate],
    rng: &mut R,
) -> Option<&'a CardCandidate> {
    least_seen(candidates).choose(rng).copied()
}
