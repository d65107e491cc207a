//! Recursive descent parser for boolean queries
//!
//! # Grammar
//!
//! ```text
//! expr    := primary (op primary)*
//! primary := '(' expr ')' | WORD
//! op      := AND NOT | AND | OR
//! ```
//!
//! All operators share one precedence level and associate to the left, so
//! `a OR b AND c` means `(a OR b) AND c`. `NOT` is only valid directly after
//! `AND`; a bare `NOT` is a parse error rather than a negation.
//!
//! Parenthesis nesting is capped at [`MAX_NESTING_DEPTH`] and the number of
//! operators at [`MAX_OPERATORS`]. Parsing, evaluation and dropping the tree
//! all recurse over it, so larger queries are rejected as parse errors.

use super::ast::{Operator, Query};
use super::lexer::Token;
use crate::error::RindexError;
use crate::Result;

/// Deepest parenthesis nesting a query may use
pub const MAX_NESTING_DEPTH: usize = 64;

/// Most operators a single query may contain
pub const MAX_OPERATORS: usize = 1024;

/// Parser over the tokens of a single query
///
/// Each query gets a fresh parser, so nothing carries over between queries.
pub struct QueryParser<'a> {
    tokens: &'a [Token],
    position: usize,
    depth: usize,
    operators: usize,
}

impl<'a> QueryParser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
            operators: 0,
        }
    }

    /// Parse the tokens into a query AST
    pub fn parse(mut self) -> Result<Query> {
        let query = self.parse_expr()?;

        // Ensure we've consumed all input
        if *self.current_token() != Token::Eof {
            return Err(self.unexpected("after query"));
        }

        Ok(query)
    }

    /// Parse: expr := primary (op primary)*
    fn parse_expr(&mut self) -> Result<Query> {
        let mut left = self.parse_primary()?;

        while let Some(op) = self.parse_operator()? {
            self.operators += 1;
            if self.operators > MAX_OPERATORS {
                return Err(RindexError::QueryParseError(format!(
                    "Query has more than {} operators",
                    MAX_OPERATORS
                )));
            }
            let right = self.parse_primary()?;
            left = op.apply(left, right);
        }

        Ok(left)
    }

    /// Parse: primary := '(' expr ')' | WORD
    fn parse_primary(&mut self) -> Result<Query> {
        match self.current_token() {
            Token::LeftParen => {
                if self.depth == MAX_NESTING_DEPTH {
                    return Err(RindexError::QueryParseError(format!(
                        "Parentheses at token {} nested deeper than {}",
                        self.position + 1,
                        MAX_NESTING_DEPTH
                    )));
                }
                self.advance(); // consume '('
                self.depth += 1;
                let expr = self.parse_expr()?;
                self.expect(Token::RightParen)?;
                self.depth -= 1;
                Ok(expr)
            }
            Token::Word(word) => {
                let query = Query::literal(word.clone());
                self.advance();
                Ok(query)
            }
            Token::Not => Err(RindexError::QueryParseError(format!(
                "NOT at token {} must follow AND",
                self.position + 1
            ))),
            _ => Err(self.unexpected("where a word or '(' was expected")),
        }
    }

    /// Parse: op := AND NOT | AND | OR, or nothing when the expression ends
    fn parse_operator(&mut self) -> Result<Option<Operator>> {
        match self.current_token() {
            Token::And => {
                self.advance();
                if *self.current_token() == Token::Not {
                    self.advance();
                    Ok(Some(Operator::AndNot))
                } else {
                    Ok(Some(Operator::And))
                }
            }
            Token::Or => {
                self.advance();
                Ok(Some(Operator::Or))
            }
            Token::Not => Err(RindexError::QueryParseError(format!(
                "NOT at token {} must follow AND",
                self.position + 1
            ))),
            _ => Ok(None),
        }
    }

    fn current_token(&self) -> &'a Token {
        self.tokens.get(self.position).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Expect a specific token and advance
    fn expect(&mut self, expected: Token) -> Result<()> {
        if *self.current_token() == expected {
            self.advance();
            Ok(())
        } else {
            Err(RindexError::QueryParseError(format!(
                "Expected {}, got {}",
                expected,
                self.current_token()
            )))
        }
    }

    fn unexpected(&self, context: &str) -> RindexError {
        let token = self.current_token();
        if *token == Token::Eof {
            RindexError::QueryParseError(format!("Unexpected end of query {}", context))
        } else {
            RindexError::QueryParseError(format!(
                "Unexpected token {} at token {} {}",
                token,
                self.position + 1,
                context
            ))
        }
    }
}

/// Parse a token sequence into a query AST
pub fn parse(tokens: &[Token]) -> Result<Query> {
    QueryParser::new(tokens).parse()
}
