use tracing::debug;

use super::stemmer::{SnowballStemmer, Stem};
use super::stopwords::Stopwords;
use crate::config::TokenizerConfig;
use crate::query::lexer::is_word;
use crate::Result;

/// Text tokenizer with stemming and stopword removal
pub struct Tokenizer {
    config: TokenizerConfig,
    stemmer: Option<Box<dyn Stem>>,
    stopwords: Stopwords,
}

impl Tokenizer {
    /// Create a new tokenizer from configuration
    ///
    /// Fails only when a configured stoplist file cannot be read.
    pub fn new(config: &TokenizerConfig) -> Result<Self> {
        let stemmer: Option<Box<dyn Stem>> = if config.stem {
            Some(Box::new(SnowballStemmer::new(config.language)))
        } else {
            None
        };

        let stopwords = if !config.remove_stopwords {
            Stopwords::empty()
        } else if let Some(path) = &config.stopword_file {
            Stopwords::from_file(path)?
        } else {
            Stopwords::builtin(config.language)
        };

        Ok(Self::with_parts(config, stopwords, stemmer))
    }

    /// Create a tokenizer from explicit stopwords and stemmer
    pub fn with_parts(
        config: &TokenizerConfig,
        stopwords: Stopwords,
        stemmer: Option<Box<dyn Stem>>,
    ) -> Self {
        Self {
            config: config.clone(),
            stemmer,
            stopwords,
        }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Tokenize text into an ordered vector of terms, duplicates preserved
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens: Vec<String> = Self::split(text)
            .map(|word| {
                if self.config.lowercase {
                    word.to_lowercase()
                } else {
                    word.to_string()
                }
            })
            .filter(|token| !self.stopwords.contains(token))
            .collect();

        if let Some(stemmer) = &self.stemmer {
            tokens = tokens
                .into_iter()
                .map(|token| stemmer.stem(&token))
                .collect();
        }

        tokens.retain(|token| !token.is_empty());

        if self.config.queryable_only {
            let before = tokens.len();
            tokens.retain(|token| is_word(token));
            if tokens.len() != before {
                debug!(
                    "Dropped {} terms not expressible as query words",
                    before - tokens.len()
                );
            }
        }

        tokens
    }

    /// Split text on runs of punctuation and whitespace
    pub fn split(text: &str) -> impl Iterator<Item = &str> {
        text.split(Self::is_separator).filter(|word| !word.is_empty())
    }

    /// Check if a character separates word candidates
    pub fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || ch.is_ascii_punctuation()
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("config", &self.config)
            .field("stemming", &self.stemmer.is_some())
            .field("stopwords", &self.stopwords.len())
            .finish()
    }
}
