use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Occurrence count per emotion tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionTally {
    counts: HashMap<String, usize>,
}

/// One row of a tally in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmotionCount {
    pub emotion: String,
    pub count: usize,
}

impl EmotionTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, emotion: &str) {
        *self.counts.entry(emotion.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, emotion: &str) -> usize {
        self.counts.get(emotion).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of matched words across all tags.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    /// Rows sorted by count descending, ties broken by tag name.
    pub fn sorted(&self) -> Vec<EmotionCount> {
        let mut rows: Vec<EmotionCount> = self
            .counts
            .iter()
            .map(|(emotion, &count)| EmotionCount {
                emotion: emotion.clone(),
                count,
            })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.emotion.cmp(&b.emotion)));
        rows
    }
}

impl<'a> FromIterator<&'a str> for EmotionTally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Self::new();
        for emotion in iter {
            tally.record(emotion);
        }
        tally
    }
}
