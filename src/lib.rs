//! # Moodscope
//!
//! Sentiment and emotion analysis for free-form English text.
//!
//! Text is lowercased, stripped of punctuation, tokenized, filtered for
//! stopwords and lemmatized. Each remaining word is looked up in a
//! `word:emotion` dictionary to build an emotion tally, while a lexicon-based
//! polarity scorer labels the whole text Positive, Negative or Neutral.
//!
//! ## Usage
//!
//! ```bash
//! moodscope serve [--port 8501] [--dictionary emotion.txt]
//! moodscope analyze "I am so happy today" [--format json]
//! ```
//!
//! ## Modules
//!
//! - `analysis` - The text analyzer pipeline and its result types
//! - `cli` - Command-line arguments and command routing
//! - `config` - Configuration file discovery and environment overrides
//! - `dictionary` - Emotion dictionary parsing
//! - `error` - Crate error type
//! - `input` - Typed text and uploaded file input
//! - `nlp` - Tokenizer, stopwords, lemmatizer and polarity scorer
//! - `web` - The analyzer page, bar chart and JSON API

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod input;
pub mod nlp;
pub mod web;


pub use analysis::{Analysis, SentimentLabel, TextAnalyzer};
pub use error::{Error, Result};
