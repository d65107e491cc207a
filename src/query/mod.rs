//! Boolean query language
//!
//! Queries combine words with `AND`, `OR` and `AND NOT`, grouped with
//! parentheses:
//!
//! ```text
//! perr AND gat
//! (perr OR gat) AND NOT pajar
//! ```
//!
//! All operators share one precedence level and associate to the left.
//!
//! # Example
//!
//! ```rust
//! use rindex::index::ReverseIndex;
//! use rindex::query::{compile, evaluate};
//!
//! let index = ReverseIndex::from_postings(vec![
//!     ("cat".to_string(), vec!["a.txt", "b.txt"]),
//!     ("dog".to_string(), vec!["a.txt"]),
//! ]);
//! let compiled = compile("cat AND NOT dog");
//! let query = compiled.query.unwrap();
//! assert_eq!(evaluate(&query, &index).len(), 1);
//! ```

pub mod ast;
pub mod completion;
pub mod evaluator;
pub mod lexer;
pub mod parser;

pub use ast::{Operator, Query};
pub use completion::{complete, complete_nth};
pub use evaluator::{evaluate, QueryEvaluator};
pub use lexer::{LexError, Lexer, Token, TokenStream};
pub use parser::{parse, QueryParser, MAX_NESTING_DEPTH, MAX_OPERATORS};

use crate::Result;

/// Outcome of lexing and parsing one query string
#[derive(Debug)]
pub struct CompiledQuery {
    /// Characters skipped by the lexer
    pub lex_errors: Vec<LexError>,
    pub query: Result<Query>,
}

/// Lex and parse a query string
///
/// Lexical errors do not stop parsing; the remaining tokens are still parsed.
pub fn compile(input: &str) -> CompiledQuery {
    let stream = Lexer::tokenize(input);
    let query = parse(&stream.tokens);
    CompiledQuery {
        lex_errors: stream.errors,
        query,
    }
}
