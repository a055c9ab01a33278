//! Emotion dictionary loading.
//!
//! The dictionary is a flat text file with one `word:emotion` entry per line.
//! Entries may be wrapped in stray quote and comma characters, so a line such
//! as `'victimized': 'cheated',` is accepted.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// What to do with a line that does not split into exactly two fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    /// Reject the whole dictionary.
    #[default]
    Fail,
    /// Drop the line, log a warning and keep loading.
    Skip,
}

impl std::str::FromStr for MalformedLinePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "skip" => Ok(Self::Skip),
            other => Err(Error::Config(format!(
                "unknown malformed line policy '{other}' (expected 'fail' or 'skip')"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub word: String,
    pub emotion: String,
}

/// Ordered mapping from lowercase word to emotion tag.
#[derive(Debug, Clone, Default)]
pub struct EmotionDictionary {
    entries: Vec<DictionaryEntry>,
    index: HashMap<String, usize>,
}

impl EmotionDictionary {
    /// Read and parse the dictionary at `path`.
    pub fn load(path: &Path, policy: MalformedLinePolicy) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::MissingResource {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(Error::Io(e)),
        };

        let dictionary = Self::parse(&contents, policy)?;
        debug!(
            path = %path.display(),
            entries = dictionary.len(),
            "Loaded emotion dictionary"
        );
        Ok(dictionary)
    }

    pub fn parse(contents: &str, policy: MalformedLinePolicy) -> Result<Self> {
        let mut dictionary = Self::default();

        for (idx, raw) in contents.lines().enumerate() {
            let line_no = idx + 1;
            if clean_line(raw).is_empty() {
                continue;
            }

            match parse_line(raw) {
                Some((word, emotion)) => dictionary.insert(word, emotion, line_no),
                None => match policy {
                    MalformedLinePolicy::Fail => {
                        return Err(Error::MalformedDictionary {
                            line: line_no,
                            content: raw.to_string(),
                        })
                    }
                    MalformedLinePolicy::Skip => {
                        warn!(line = line_no, content = raw, "Skipping malformed dictionary line");
                    }
                },
            }
        }

        Ok(dictionary)
    }

    fn insert(&mut self, word: String, emotion: String, line_no: usize) {
        if self.index.contains_key(&word) {
            debug!(line = line_no, word = %word, "Duplicate dictionary word, keeping first entry");
            return;
        }
        self.index.insert(word.clone(), self.entries.len());
        self.entries.push(DictionaryEntry { word, emotion });
    }

    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.index
            .get(word)
            .map(|&idx| self.entries[idx].emotion.as_str())
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn clean_line(line: &str) -> String {
    line.chars()
        .filter(|c| !matches!(c, '\n' | '\r' | ',' | '\'' | '"'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Parse one dictionary line into `(word, emotion)`.
///
/// Returns `None` unless the cleaned line splits on `:` into exactly two
/// non-empty fields.
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let cleaned = clean_line(line);
    let mut fields = cleaned.split(':');
    let (word, emotion) = match (fields.next(), fields.next(), fields.next()) {
        (Some(word), Some(emotion), None) => (word.trim(), emotion.trim()),
        _ => return None,
    };
    if word.is_empty() || emotion.is_empty() {
        return None;
    }
    Some((word.to_lowercase(), emotion.to_string()))
}
