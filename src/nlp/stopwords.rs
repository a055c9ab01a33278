use std::collections::HashSet;

use super::{NlpResources, StopwordFilter};
use crate::error::Result;

/// The standard English stopword list.
#[derive(Debug, Clone, Copy)]
pub struct EnglishStopwords {
    words: &'static HashSet<String>,
}

impl EnglishStopwords {
    pub fn new() -> Result<Self> {
        Ok(Self::from_resources(super::ensure_resources()?))
    }

    pub fn from_resources(resources: &'static NlpResources) -> Self {
        Self {
            words: resources.stopwords(),
        }
    }
}

impl StopwordFilter for EnglishStopwords {
    fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
