use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use stop_words::{get, LANGUAGE};

use crate::config::Language;
use crate::error::RindexError;
use crate::Result;

/// Fixed set of tokens discarded before stemming
///
/// Matching is exact and whole-token: `"the"` removes `the` but not `theme`.
#[derive(Clone, Debug, Default)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// A stopword set that filters nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in stopword list for a language
    pub fn builtin(language: Language) -> Self {
        get(stop_words_language(language))
            .into_iter()
            .map(|s| s.to_lowercase())
            .collect()
    }

    /// Read a one-word-per-line stoplist
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_lowercase());
            }
        }
        Ok(Self { words })
    }

    /// Read a stoplist file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| {
            RindexError::InvalidConfig(format!("cannot read stoplist {:?}: {}", path, e))
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Stopwords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

fn stop_words_language(language: Language) -> LANGUAGE {
    match language {
        Language::Danish => LANGUAGE::Danish,
        Language::Dutch => LANGUAGE::Dutch,
        Language::English => LANGUAGE::English,
        Language::Finnish => LANGUAGE::Finnish,
        Language::French => LANGUAGE::French,
        Language::German => LANGUAGE::German,
        Language::Hungarian => LANGUAGE::Hungarian,
        Language::Italian => LANGUAGE::Italian,
        Language::Norwegian => LANGUAGE::Norwegian,
        Language::Portuguese => LANGUAGE::Portuguese,
        Language::Romanian => LANGUAGE::Romanian,
        Language::Russian => LANGUAGE::Russian,
        Language::Spanish => LANGUAGE::Spanish,
        Language::Swedish => LANGUAGE::Swedish,
        Language::Turkish => LANGUAGE::Turkish,
    }
}
