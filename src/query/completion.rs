//! Word completion for interactive query input
//!
//! Candidates are the reserved keywords followed by the index terms, both
//! filtered by prefix. Completion holds no state of its own.

use crate::index::ReverseIndex;

/// Keywords offered ahead of index terms
pub const KEYWORDS: [&str; 3] = ["AND", "OR", "NOT"];

/// All completion candidates for `prefix`
pub fn complete(prefix: &str, index: &ReverseIndex) -> Vec<String> {
    let mut candidates: Vec<String> = KEYWORDS
        .iter()
        .filter(|keyword| keyword.starts_with(prefix))
        .map(|keyword| keyword.to_string())
        .collect();
    candidates.extend(index.terms_with_prefix(prefix).map(str::to_string));
    candidates
}

/// The `state`-th candidate for `prefix`, or `None` once candidates run out
///
/// Callers ask for state 0, 1, 2, ... until `None`, the way line editors
/// drive completion callbacks.
pub fn complete_nth(prefix: &str, index: &ReverseIndex, state: usize) -> Option<String> {
    complete(prefix, index).into_iter().nth(state)
}
