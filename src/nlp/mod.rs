//! Pluggable NLP capabilities used by the analysis pipeline.
//!
//! The pipeline only depends on the four traits defined here. Built-in
//! English implementations are provided. The stopword filter and lemmatizer
//! draw on resources embedded in the binary and initialized once through
//! [`ensure_resources`]; the scorer wraps the `vader_sentiment` crate.
//!
//! - [`WordTokenizer`] - regex word splitter
//! - [`EnglishStopwords`] - the standard English stopword list
//! - [`NounLemmatizer`] - WordNet morphy noun lemmatization
//! - [`VaderScorer`] - lexicon and rule based polarity scoring

use serde::{Deserialize, Serialize};

pub mod lemmatizer;
pub mod resources;
pub mod stopwords;
pub mod tokenizer;
pub mod vader;

pub use lemmatizer::NounLemmatizer;
pub use resources::{ensure_resources, NlpResources};
pub use stopwords::EnglishStopwords;
pub use tokenizer::WordTokenizer;
pub use vader::VaderScorer;

/// Splits text into word tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Decides whether a token carries too little meaning to keep.
pub trait StopwordFilter: Send + Sync {
    fn is_stopword(&self, word: &str) -> bool;
}

/// Reduces a word to its dictionary base form.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, word: &str) -> String;
}

/// Computes negative/neutral/positive weights for a piece of text.
pub trait PolarityScorer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> PolarityScores;
}

/// Polarity weights for one text.
///
/// `neg`, `neu` and `pos` are proportions that sum to 1.0 (within rounding)
/// for text containing at least one token, and are all zero otherwise.
/// `compound` is the normalized overall valence in `[-1.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}
