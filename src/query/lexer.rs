//! Lexer for boolean query strings
//!
//! Produces words, the upper-case keywords `AND`, `OR` and `NOT`, and
//! parentheses. Unknown characters are recorded as diagnostics and skipped, so
//! one stray character never hides the rest of the query.

use std::fmt;

use tracing::debug;

/// Token types for query string parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of letters, underscores and periods
    Word(String),
    /// AND operator
    And,
    /// OR operator
    Or,
    /// NOT, only meaningful right after AND
    Not,
    /// Left parenthesis (grouping)
    LeftParen,
    /// Right parenthesis (grouping)
    RightParen,
    /// End of input
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => write!(f, "'{}'", word),
            Token::And => f.write_str("AND"),
            Token::Or => f.write_str("OR"),
            Token::Not => f.write_str("NOT"),
            Token::LeftParen => f.write_str("'('"),
            Token::RightParen => f.write_str("')'"),
            Token::Eof => f.write_str("end of query"),
        }
    }
}

/// A character the lexer could not place in any token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    /// Character offset in the query string
    pub position: usize,
    pub character: char,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bad token '{}' at position {}",
            self.character, self.position
        )
    }
}

/// Tokens of a whole query plus the characters that were skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    /// Tokens in input order, without a trailing `Eof`
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

/// Check if a character can be part of a query word
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '.'
}

/// Check if a whole term can be written as a query word
pub fn is_word(term: &str) -> bool {
    !term.is_empty() && term.chars().all(is_word_char)
}

/// Lexer for tokenizing query strings
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    errors: Vec<LexError>,
}

impl Lexer {
    /// Create a new lexer for the given input string
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            errors: Vec::new(),
        }
    }

    /// Tokenize a complete query string
    pub fn tokenize(input: &str) -> TokenStream {
        let mut lexer = Self::new(input);
        let mut tokens = Vec::new();
        loop {
            match lexer.next_token() {
                Token::Eof => break,
                token => tokens.push(token),
            }
        }
        TokenStream {
            tokens,
            errors: lexer.errors,
        }
    }

    /// Get the next token from the input, skipping unknown characters
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            if self.is_eof() {
                return Token::Eof;
            }

            let ch = self.current_char();
            match ch {
                '(' => {
                    self.advance();
                    return Token::LeftParen;
                }
                ')' => {
                    self.advance();
                    return Token::RightParen;
                }
                _ if is_word_char(ch) => return self.read_word(),
                _ => {
                    let error = LexError {
                        position: self.position,
                        character: ch,
                    };
                    debug!("{}", error);
                    self.errors.push(error);
                    self.advance();
                }
            }
        }
    }

    /// Diagnostics collected so far
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Check if the lexer has reached the end of input
    pub fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    fn read_word(&mut self) -> Token {
        let mut word = String::new();

        while !self.is_eof() {
            let ch = self.current_char();
            if is_word_char(ch) {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Keywords are case-sensitive; "and" or "Not" are plain words
        match word.as_str() {
            "AND" => Token::And,
            "OR" => Token::Or,
            "NOT" => Token::Not,
            _ => Token::Word(word),
        }
    }

    fn current_char(&self) -> char {
        self.input[self.position]
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while !self.is_eof() && matches!(self.current_char(), ' ' | '\t' | '\n' | '\r') {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(w: &str) -> Token {
        Token::Word(w.to_string())
    }

    #[test]
    fn test_simple_word() {
        let mut lexer = Lexer::new("hello");
        assert_eq!(lexer.next_token(), word("hello"));
        assert_eq!(lexer.next_token(), Token::Eof);
    }

    #[test]
    fn test_boolean_operators() {
        let stream = Lexer::tokenize("a AND b OR c AND NOT d");
        assert_eq!(
            stream.tokens,
            vec![
                word("a"),
                Token::And,
                word("b"),
                Token::Or,
                word("c"),
                Token::And,
                Token::Not,
                word("d"),
            ]
        );
        assert!(stream.errors.is_empty());
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let stream = Lexer::tokenize("and Or nOT ANDROID");
        assert_eq!(
            stream.tokens,
            vec![word("and"), word("Or"), word("nOT"), word("ANDROID")]
        );
    }

    #[test]
    fn test_keyword_with_word_chars_is_word() {
        let stream = Lexer::tokenize("AND_ OR. _NOT");
        assert_eq!(stream.tokens, vec![word("AND_"), word("OR."), word("_NOT")]);
    }

    #[test]
    fn test_underscore_and_period_in_words() {
        let stream = Lexer::tokenize("snake_case file.txt .hidden");
        assert_eq!(
            stream.tokens,
            vec![word("snake_case"), word("file.txt"), word(".hidden")]
        );
    }

    #[test]
    fn test_non_ascii_letters() {
        let stream = Lexer::tokenize("niñ AND canción");
        assert_eq!(stream.tokens, vec![word("niñ"), Token::And, word("canción")]);
    }

    #[test]
    fn test_grouping() {
        let stream = Lexer::tokenize("(a OR b)");
        assert_eq!(
            stream.tokens,
            vec![
                Token::LeftParen,
                word("a"),
                Token::Or,
                word("b"),
                Token::RightParen,
            ]
        );
    }

    #[test]
    fn test_whitespace_ignored() {
        let stream = Lexer::tokenize(" \tcat\r\n AND\tdog \n");
        assert_eq!(stream.tokens, vec![word("cat"), Token::And, word("dog")]);
        assert!(stream.errors.is_empty());
    }

    #[test]
    fn test_bad_characters_reported_and_skipped() {
        let stream = Lexer::tokenize("cat & dog2");
        assert_eq!(stream.tokens, vec![word("cat"), word("dog")]);
        assert_eq!(
            stream.errors,
            vec![
                LexError {
                    position: 4,
                    character: '&'
                },
                LexError {
                    position: 9,
                    character: '2'
                },
            ]
        );
    }

    #[test]
    fn test_bad_character_splits_word() {
        let stream = Lexer::tokenize("ca-t");
        assert_eq!(stream.tokens, vec![word("ca"), word("t")]);
        assert_eq!(stream.errors.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let stream = Lexer::tokenize("");
        assert!(stream.tokens.is_empty());
        assert!(stream.errors.is_empty());
    }

    #[test]
    fn test_error_display() {
        let error = LexError {
            position: 3,
            character: '#',
        };
        assert_eq!(error.to_string(), "Bad token '#' at position 3");
    }

    #[test]
    fn test_is_word() {
        assert!(is_word("perr"));
        assert!(is_word("a.b_c"));
        assert!(!is_word(""));
        assert!(!is_word("b2b"));
        assert!(!is_word("x-y"));
    }
}
