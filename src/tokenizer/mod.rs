//! Text normalization pipeline
//!
//! Turns raw document text into the ordered term sequence used to build the
//! index: split on punctuation and whitespace, case-fold, drop stopwords, stem.

pub mod stemmer;
pub mod stopwords;
#[allow(clippy::module_inception)]
pub mod tokenizer;

pub use stemmer::{IdentityStemmer, SnowballStemmer, Stem};
pub use stopwords::Stopwords;
pub use tokenizer::Tokenizer;
