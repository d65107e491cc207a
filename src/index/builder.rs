//! Index construction from normalized documents

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use tracing::{debug, info};

use super::reverse_index::ReverseIndex;
use super::vocabulary::VocabularySelector;
use crate::config::IndexSettings;
use crate::error::RindexError;
use crate::tokenizer::Tokenizer;
use crate::Result;

/// Accumulates documents, then keeps only the most frequent terms
///
/// Term counts exist only while building; the finished index holds no
/// frequency information.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    vocabulary: VocabularySelector,
    postings: HashMap<String, BTreeSet<String>>,
    documents: usize,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one document's normalized term sequence
    pub fn add_terms<S: AsRef<str>>(&mut self, doc_id: &str, terms: &[S]) {
        self.vocabulary.observe(terms);
        for term in terms {
            let term = term.as_ref();
            match self.postings.get_mut(term) {
                Some(docs) => {
                    if !docs.contains(doc_id) {
                        docs.insert(doc_id.to_string());
                    }
                }
                None => {
                    self.postings
                        .insert(term.to_string(), BTreeSet::from([doc_id.to_string()]));
                }
            }
        }
        self.documents += 1;
        debug!("Added document {} with {} terms", doc_id, terms.len());
    }

    /// Normalize and add a document's raw text
    pub fn add_document(&mut self, tokenizer: &Tokenizer, doc_id: &str, text: &str) {
        let terms = tokenizer.tokenize(text);
        self.add_terms(doc_id, &terms);
    }

    /// Number of documents added so far
    pub fn document_count(&self) -> usize {
        self.documents
    }

    /// Select the `vocabulary_size` most frequent terms and build the index
    pub fn finish(mut self, vocabulary_size: usize) -> ReverseIndex {
        let selected = self.vocabulary.select(vocabulary_size);
        info!(
            "Selected {} of {} distinct terms ({} occurrences) from {} documents",
            selected.len(),
            self.vocabulary.distinct_terms(),
            self.vocabulary.total_occurrences(),
            self.documents
        );

        let entries: Vec<(String, BTreeSet<String>)> = selected
            .into_iter()
            .map(|term| {
                let docs = self.postings.remove(&term).unwrap_or_default();
                (term, docs)
            })
            .collect();

        ReverseIndex::from_postings(entries)
    }
}

/// Build an index over the given document paths
///
/// Each path becomes the document id as written. Any unreadable document
/// aborts the whole build.
pub fn build_index<P: AsRef<Path>>(paths: &[P], settings: &IndexSettings) -> Result<ReverseIndex> {
    let tokenizer = Tokenizer::new(&settings.tokenizer_config)?;
    let mut builder = IndexBuilder::new();

    for path in paths {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RindexError::DocumentRead {
            path: path.to_path_buf(),
            source,
        })?;
        builder.add_document(&tokenizer, &path.to_string_lossy(), &text);
    }

    info!("Read {} documents", builder.document_count());
    Ok(builder.finish(settings.vocabulary_size))
}
