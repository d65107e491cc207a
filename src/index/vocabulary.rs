//! Frequency-based vocabulary selection
//!
//! Counts every term occurrence across the corpus and keeps the `n` most
//! frequent terms. Equal counts are ordered lexicographically, so the chosen
//! vocabulary does not depend on the order documents were read in.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Corpus-wide term counter
#[derive(Clone, Debug, Default)]
pub struct VocabularySelector {
    counts: HashMap<String, u64>,
    total: u64,
}

impl VocabularySelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one document's term sequence (duplicates count)
    pub fn observe<S: AsRef<str>>(&mut self, terms: &[S]) {
        for term in terms {
            self.observe_term(term.as_ref());
        }
    }

    pub fn observe_term(&mut self, term: &str) {
        match self.counts.get_mut(term) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(term.to_string(), 1);
            }
        }
        self.total += 1;
    }

    /// Number of distinct terms observed
    pub fn distinct_terms(&self) -> usize {
        self.counts.len()
    }

    /// Total number of term occurrences observed
    pub fn total_occurrences(&self) -> u64 {
        self.total
    }

    /// Select the `n` most frequent terms, most frequent first
    ///
    /// Ties are broken by ascending term. `n == 0` selects nothing.
    pub fn select(&self, n: usize) -> Vec<String> {
        if n == 0 {
            return Vec::new();
        }

        // Min-heap of the best `n` keys seen so far; the weakest key sits on top
        let mut heap: BinaryHeap<Reverse<(u64, Reverse<&str>)>> =
            BinaryHeap::with_capacity(n.min(self.counts.len()) + 1);

        for (term, &count) in &self.counts {
            let key = (count, Reverse(term.as_str()));
            if heap.len() < n {
                heap.push(Reverse(key));
            } else if let Some(Reverse(weakest)) = heap.peek() {
                if key > *weakest {
                    heap.pop();
                    heap.push(Reverse(key));
                }
            }
        }

        let mut selected: Vec<(u64, Reverse<&str>)> =
            heap.into_iter().map(|Reverse(key)| key).collect();
        selected.sort_unstable_by(|a, b| b.cmp(a));

        selected
            .into_iter()
            .map(|(_, Reverse(term))| term.to_string())
            .collect()
    }
}
