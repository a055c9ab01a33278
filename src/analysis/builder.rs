//! Construction logic for [`TextAnalyzer`].

use std::path::PathBuf;

use super::TextAnalyzer;
use crate::dictionary::MalformedLinePolicy;
use crate::error::Result;
use crate::nlp::{
    ensure_resources, EnglishStopwords, Lemmatizer, NounLemmatizer, PolarityScorer,
    StopwordFilter, Tokenizer, VaderScorer, WordTokenizer,
};

/// Builder for [`TextAnalyzer`] instances.
///
/// Any capability left unset falls back to the built-in English
/// implementation backed by the embedded resources.
pub struct TextAnalyzerBuilder {
    dictionary_path: PathBuf,
    malformed_lines: MalformedLinePolicy,
    tokenizer: Option<Box<dyn Tokenizer>>,
    stopwords: Option<Box<dyn StopwordFilter>>,
    lemmatizer: Option<Box<dyn Lemmatizer>>,
    scorer: Option<Box<dyn PolarityScorer>>,
}

impl TextAnalyzerBuilder {
    pub fn new(dictionary_path: impl Into<PathBuf>) -> Self {
        Self {
            dictionary_path: dictionary_path.into(),
            malformed_lines: MalformedLinePolicy::default(),
            tokenizer: None,
            stopwords: None,
            lemmatizer: None,
            scorer: None,
        }
    }

    pub fn malformed_lines(mut self, policy: MalformedLinePolicy) -> Self {
        self.malformed_lines = policy;
        self
    }

    pub fn tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Some(Box::new(tokenizer));
        self
    }

    pub fn stopwords(mut self, stopwords: impl StopwordFilter + 'static) -> Self {
        self.stopwords = Some(Box::new(stopwords));
        self
    }

    pub fn lemmatizer(mut self, lemmatizer: impl Lemmatizer + 'static) -> Self {
        self.lemmatizer = Some(Box::new(lemmatizer));
        self
    }

    pub fn scorer(mut self, scorer: impl PolarityScorer + 'static) -> Self {
        self.scorer = Some(Box::new(scorer));
        self
    }

    /// Build the analyzer, initializing embedded resources if a built-in
    /// capability is needed.
    pub fn build(self) -> Result<TextAnalyzer> {
        let tokenizer: Box<dyn Tokenizer> = match self.tokenizer {
            Some(tokenizer) => tokenizer,
            None => Box::new(WordTokenizer::new()),
        };
        let stopwords: Box<dyn StopwordFilter> = match self.stopwords {
            Some(stopwords) => stopwords,
            None => Box::new(EnglishStopwords::from_resources(ensure_resources()?)),
        };
        let lemmatizer: Box<dyn Lemmatizer> = match self.lemmatizer {
            Some(lemmatizer) => lemmatizer,
            None => Box::new(NounLemmatizer::from_resources(ensure_resources()?)),
        };
        let scorer: Box<dyn PolarityScorer> = match self.scorer {
            Some(scorer) => scorer,
            None => Box::new(VaderScorer::new()),
        };

        Ok(TextAnalyzer {
            dictionary_path: self.dictionary_path,
            malformed_lines: self.malformed_lines,
            tokenizer,
            stopwords,
            lemmatizer,
            scorer,
        })
    }
}
