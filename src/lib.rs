pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod session;
pub mod tokenizer;

pub use config::{IndexSettings, Language, TokenizerConfig};
pub use error::{Result, RindexError};
pub use index::{build_index, read_index_file, write_index_file, DocumentSet, ReverseIndex};
pub use query::{compile, evaluate, Query};
pub use session::QuerySession;
pub use tokenizer::Tokenizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
