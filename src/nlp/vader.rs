//! VADER polarity scoring.
//!
//! Scoring is delegated to the `vader_sentiment` crate, which ships the full
//! published lexicon and rule set: boosters and dampeners, negations
//! (including "no" and "never so/this"), "least", "but" shifts, capital and
//! punctuation emphasis, and idioms.

use vader_sentiment::SentimentIntensityAnalyzer;

use super::{PolarityScorer, PolarityScores};

pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for VaderScorer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let scores = self.analyzer.polarity_scores(text);
        let score = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        PolarityScores {
            neg: score("neg"),
            neu: score("neu"),
            pos: score("pos"),
            compound: score("compound"),
        }
    }
}
