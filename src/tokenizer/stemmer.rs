use std::fmt;

use rust_stemmers::{Algorithm, Stemmer};

use crate::config::Language;

/// Reduces a normalized token to its linguistic stem
pub trait Stem: Send + Sync {
    fn stem(&self, token: &str) -> String;
}

/// Snowball stemmer for one of the supported languages
pub struct SnowballStemmer {
    language: Language,
    inner: Stemmer,
}

impl SnowballStemmer {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            inner: Stemmer::create(algorithm_for(language)),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl Stem for SnowballStemmer {
    fn stem(&self, token: &str) -> String {
        self.inner.stem(token).into_owned()
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

/// Stemmer that returns its input unchanged
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityStemmer;

impl Stem for IdentityStemmer {
    fn stem(&self, token: &str) -> String {
        token.to_string()
    }
}

fn algorithm_for(language: Language) -> Algorithm {
    match language {
        Language::Danish => Algorithm::Danish,
        Language::Dutch => Algorithm::Dutch,
        Language::English => Algorithm::English,
        Language::Finnish => Algorithm::Finnish,
        Language::French => Algorithm::French,
        Language::German => Algorithm::German,
        Language::Hungarian => Algorithm::Hungarian,
        Language::Italian => Algorithm::Italian,
        Language::Norwegian => Algorithm::Norwegian,
        Language::Portuguese => Algorithm::Portuguese,
        Language::Romanian => Algorithm::Romanian,
        Language::Russian => Algorithm::Russian,
        Language::Spanish => Algorithm::Spanish,
        Language::Swedish => Algorithm::Swedish,
        Language::Turkish => Algorithm::Turkish,
    }
}
