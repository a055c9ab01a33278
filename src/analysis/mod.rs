//! Sentiment and emotion analysis pipeline.
//!
//! One call runs straight through:
//!
//! ```text
//! lowercase → strip punctuation → tokenize → drop stopwords → lemmatize
//!           → match against the emotion dictionary → tally
//! cleaned text → polarity scores → sentiment label
//! ```
//!
//! The emotion dictionary is re-read from disk on every call.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, debug_span};

pub mod builder;
pub mod normalize;
pub mod sentiment;
pub mod tally;

pub use builder::TextAnalyzerBuilder;
pub use normalize::clean_text;
pub use sentiment::SentimentLabel;
pub use tally::{EmotionCount, EmotionTally};

pub use crate::nlp::PolarityScores;

use crate::dictionary::{EmotionDictionary, MalformedLinePolicy};
use crate::error::Result;
use crate::nlp::{Lemmatizer, PolarityScorer, StopwordFilter, Tokenizer};

/// Outcome of analyzing one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub tally: EmotionTally,
    pub sentiment: SentimentLabel,
    pub scores: PolarityScores,
    /// Lemmatized tokens that survived stopword removal.
    pub tokens: Vec<String>,
}

pub struct TextAnalyzer {
    dictionary_path: PathBuf,
    malformed_lines: MalformedLinePolicy,
    tokenizer: Box<dyn Tokenizer>,
    stopwords: Box<dyn StopwordFilter>,
    lemmatizer: Box<dyn Lemmatizer>,
    scorer: Box<dyn PolarityScorer>,
}

impl TextAnalyzer {
    pub fn builder(dictionary_path: impl Into<PathBuf>) -> TextAnalyzerBuilder {
        TextAnalyzerBuilder::new(dictionary_path)
    }

    pub fn dictionary_path(&self) -> &Path {
        &self.dictionary_path
    }

    /// Analyze `text`, producing an emotion tally and a sentiment label.
    ///
    /// Fails with [`crate::error::Error::MissingResource`] when the emotion
    /// dictionary cannot be found; no partial result is produced.
    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        let span = debug_span!("analyze", chars = text.chars().count());
        let _enter = span.enter();

        let cleaned = clean_text(text);
        let tokens = self.tokens(&cleaned);

        let dictionary = EmotionDictionary::load(&self.dictionary_path, self.malformed_lines)?;
        let tally: EmotionTally = tokens
            .iter()
            .filter_map(|token| dictionary.lookup(token))
            .collect();

        let scores = self.scorer.polarity_scores(&cleaned);
        let sentiment = SentimentLabel::from_scores(&scores);

        debug!(
            tokens = tokens.len(),
            matches = tally.total(),
            emotions = tally.len(),
            %sentiment,
            "Analysis complete"
        );

        Ok(Analysis {
            tally,
            sentiment,
            scores,
            tokens,
        })
    }

    fn tokens(&self, cleaned: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(cleaned)
            .into_iter()
            .filter(|token| !self.stopwords.is_stopword(token))
            .map(|token| self.lemmatizer.lemmatize(&token))
            .collect()
    }
}
