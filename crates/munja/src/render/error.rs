//! Batch rendering errors and near-miss key suggestions.

use strsim::levenshtein;
use thiserror::Error;

/// Errors surfaced by [`render_batch`](super::render_batch).
///
/// Per-placeholder failures are not errors; they become in-message markers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    /// The batch contained no groups at all.
    #[error("no groups to render")]
    NoGroups,

    /// The template's placeholders matched none of the available keys for
    /// any group.
    #[error("no placeholder resolved for any group; check the template against the mapped variables")]
    NothingResolved,
}

/// Returns up to three known keys within edit distance of `key`.
///
/// Short keys tolerate a single edit; longer keys tolerate two.
pub fn suggest_keys<'a>(key: &str, known: impl Iterator<Item = &'a String>) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut candidates: Vec<(usize, String)> = known
        .filter_map(|candidate| {
            let distance = levenshtein(key, candidate);
            (distance > 0 && distance <= max_distance).then(|| (distance, candidate.clone()))
        })
        .collect();
    candidates.sort();
    candidates
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate)
        .collect()
}
