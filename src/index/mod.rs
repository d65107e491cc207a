//! Reverse index construction and persistence
//!
//! Build mode runs documents through the tokenizer, counts terms across the
//! corpus, keeps the most frequent ones and records which documents contain
//! each of them. The result is written in a line-oriented text format.

pub mod builder;
pub mod codec;
pub mod reverse_index;
pub mod vocabulary;

pub use builder::{build_index, IndexBuilder};
pub use codec::{decode, decode_str, encode, encode_to_string, read_index_file, write_index_file};
pub use reverse_index::{DocumentSet, ReverseIndex};
pub use vocabulary::VocabularySelector;
