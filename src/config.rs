use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::RindexError;
use crate::Result;

/// Default number of terms kept in the vocabulary
pub const DEFAULT_VOCABULARY_SIZE: usize = 500;

/// Languages with both a snowball stemmer and a built-in stopword list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Hungarian,
    Italian,
    Norwegian,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swedish,
    Turkish,
}

impl Language {
    pub const ALL: [Language; 15] = [
        Language::Danish,
        Language::Dutch,
        Language::English,
        Language::Finnish,
        Language::French,
        Language::German,
        Language::Hungarian,
        Language::Italian,
        Language::Norwegian,
        Language::Portuguese,
        Language::Romanian,
        Language::Russian,
        Language::Spanish,
        Language::Swedish,
        Language::Turkish,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Language::Danish => "danish",
            Language::Dutch => "dutch",
            Language::English => "english",
            Language::Finnish => "finnish",
            Language::French => "french",
            Language::German => "german",
            Language::Hungarian => "hungarian",
            Language::Italian => "italian",
            Language::Norwegian => "norwegian",
            Language::Portuguese => "portuguese",
            Language::Romanian => "romanian",
            Language::Russian => "russian",
            Language::Spanish => "spanish",
            Language::Swedish => "swedish",
            Language::Turkish => "turkish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = RindexError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.name() == wanted)
            .ok_or_else(|| RindexError::InvalidConfig(format!("unsupported language '{}'", s)))
    }
}

/// Tokenizer configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenizerConfig {
    pub lowercase: bool,
    pub remove_stopwords: bool,
    pub stem: bool,
    pub language: Language,
    /// One-word-per-line stoplist replacing the built-in list for `language`
    #[serde(default)]
    pub stopword_file: Option<PathBuf>,
    /// Drop terms that a query WORD cannot spell
    #[serde(default)]
    pub queryable_only: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_stopwords: true,
            stem: true,
            language: Language::Spanish,
            stopword_file: None,
            queryable_only: false,
        }
    }
}

/// Index build settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexSettings {
    /// Number of most frequent terms retained in the index
    pub vocabulary_size: usize,
    pub tokenizer_config: TokenizerConfig,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            vocabulary_size: DEFAULT_VOCABULARY_SIZE,
            tokenizer_config: TokenizerConfig::default(),
        }
    }
}

impl IndexSettings {
    /// Set the vocabulary size
    pub fn with_vocabulary_size(mut self, size: usize) -> Self {
        self.vocabulary_size = size;
        self
    }

    /// Set the stemming and stopword language
    pub fn with_language(mut self, language: Language) -> Self {
        self.tokenizer_config.language = language;
        self
    }

    /// Use a stoplist file instead of the built-in stopwords
    pub fn with_stopword_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.tokenizer_config.stopword_file = Some(path.into());
        self
    }

    /// Replace the tokenizer configuration
    pub fn with_tokenizer_config(mut self, config: TokenizerConfig) -> Self {
        self.tokenizer_config = config;
        self
    }

    /// Load settings from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Serialize the settings to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
