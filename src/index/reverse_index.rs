//! Immutable term → document set mapping
//!
//! Document ids are interned into a sorted table and postings are stored as
//! roaring bitmaps of table positions. Since the table is sorted, iterating a
//! bitmap yields document ids in ascending lexicographic order.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ops::Bound;

use roaring::RoaringBitmap;

/// A set of document ids, ordered for stable output
pub type DocumentSet = BTreeSet<String>;

/// Reverse index snapshot, read-only once built
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReverseIndex {
    /// Sorted document ids; a document number is a position in this table
    documents: Vec<String>,
    postings: BTreeMap<String, RoaringBitmap>,
}

impl ReverseIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from term → document id pairs
    ///
    /// A term listed with no documents is kept with an empty posting set.
    pub fn from_postings<I, D, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, D)>,
        D: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut by_term: BTreeMap<String, DocumentSet> = BTreeMap::new();
        for (term, docs) in entries {
            by_term
                .entry(term)
                .or_default()
                .extend(docs.into_iter().map(Into::into));
        }

        let documents: Vec<String> = by_term
            .values()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let docnos: HashMap<&str, u32> = documents
            .iter()
            .enumerate()
            .map(|(docno, doc)| (doc.as_str(), docno as u32))
            .collect();

        let postings = by_term
            .iter()
            .map(|(term, docs)| {
                let bitmap: RoaringBitmap = docs.iter().map(|doc| docnos[doc.as_str()]).collect();
                (term.clone(), bitmap)
            })
            .collect();

        Self {
            documents,
            postings,
        }
    }

    /// Posting bitmap for a term, if the term is in the vocabulary
    pub fn postings(&self, term: &str) -> Option<&RoaringBitmap> {
        self.postings.get(term)
    }

    /// Document ids containing a term; empty when the term is absent
    pub fn documents_for(&self, term: &str) -> DocumentSet {
        self.postings(term)
            .map(|bitmap| self.resolve(bitmap))
            .unwrap_or_default()
    }

    /// Map document numbers back to document ids
    pub fn resolve(&self, bitmap: &RoaringBitmap) -> DocumentSet {
        bitmap
            .iter()
            .filter_map(|docno| self.documents.get(docno as usize))
            .cloned()
            .collect()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Terms in ascending order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Terms starting with `prefix`, in ascending order
    pub fn terms_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.postings
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .map(|(term, _)| term.as_str())
            .take_while(move |term| term.starts_with(prefix))
    }

    /// Iterate `(term, document ids)` with both levels in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Vec<&str>)> {
        self.postings.iter().map(|(term, bitmap)| {
            let docs = bitmap
                .iter()
                .filter_map(|docno| self.documents.get(docno as usize))
                .map(String::as_str)
                .collect();
            (term.as_str(), docs)
        })
    }

    /// All document ids referenced by some posting, ascending
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
