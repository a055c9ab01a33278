use serde::{Deserialize, Serialize};
use std::fmt;

use crate::nlp::PolarityScores;

/// Coarse sentiment of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Compare the negative and positive weights; exact ties are Neutral.
    pub fn from_scores(scores: &PolarityScores) -> Self {
        if scores.neg > scores.pos {
            SentimentLabel::Negative
        } else if scores.neg < scores.pos {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
