//! Embedded NLP resources and their one-time initialization.

use once_cell::sync::OnceCell;
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::error::{Error, Result};

const STOPWORDS_SRC: &str = include_str!("../../assets/english_stopwords.txt");
const NOUN_EXCEPTIONS_SRC: &str = include_str!("../../assets/noun_exceptions.txt");
const NOUN_INDEX_SRC: &str = include_str!("../../assets/noun_index.txt");

static RESOURCES: OnceCell<NlpResources> = OnceCell::new();

/// Parsed lookup tables shared by the built-in NLP capabilities.
#[derive(Debug)]
pub struct NlpResources {
    stopwords: HashSet<String>,
    noun_exceptions: HashMap<String, String>,
    noun_index: HashSet<String>,
}

/// Make sure the embedded resources are parsed and ready.
///
/// The first call parses every table; later calls return the same instance
/// without doing any work. Call it once at startup so a broken resource
/// surfaces before the first request rather than during one.
pub fn ensure_resources() -> Result<&'static NlpResources> {
    RESOURCES.get_or_try_init(|| {
        let resources =
            NlpResources::from_sources(STOPWORDS_SRC, NOUN_EXCEPTIONS_SRC, NOUN_INDEX_SRC)?;
        debug!(
            stopwords = resources.stopwords.len(),
            noun_exceptions = resources.noun_exceptions.len(),
            noun_index = resources.noun_index.len(),
            "NLP resources initialized"
        );
        Ok(resources)
    })
}

impl NlpResources {
    /// Parse resources from raw sources. Lines starting with `#` and blank
    /// lines are ignored in every source.
    pub fn from_sources(stopwords: &str, noun_exceptions: &str, noun_index: &str) -> Result<Self> {
        Ok(Self {
            stopwords: parse_word_list(stopwords),
            noun_exceptions: parse_exceptions(noun_exceptions)?,
            noun_index: parse_noun_index(noun_index)?,
        })
    }

    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }

    pub fn noun_exceptions(&self) -> &HashMap<String, String> {
        &self.noun_exceptions
    }

    /// Known noun base forms.
    pub fn noun_index(&self) -> &HashSet<String> {
        &self.noun_index
    }
}

fn content_lines(src: &str) -> impl Iterator<Item = (usize, &str)> {
    src.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn parse_word_list(src: &str) -> HashSet<String> {
    content_lines(src).map(|(_, word)| word.to_string()).collect()
}

fn parse_exceptions(src: &str) -> Result<HashMap<String, String>> {
    let mut exceptions = HashMap::new();
    for (line_no, line) in content_lines(src) {
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next(), fields.next()) {
            (Some(inflected), Some(lemma), None) => {
                exceptions.insert(inflected.to_string(), lemma.to_string());
            }
            _ => {
                return Err(Error::Resource(format!(
                    "noun exceptions line {line_no}: expected 'inflected lemma', got {line:?}"
                )))
            }
        }
    }
    debug!("Parsed {} noun exceptions", exceptions.len());
    Ok(exceptions)
}

fn parse_noun_index(src: &str) -> Result<HashSet<String>> {
    let mut index = HashSet::new();
    for (line_no, line) in content_lines(src) {
        if line.split_whitespace().count() != 1 {
            return Err(Error::Resource(format!(
                "noun index line {line_no}: expected a single word, got {line:?}"
            )));
        }
        index.insert(line.to_string());
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_resources_is_idempotent() {
        let first = ensure_resources().unwrap();
        let second = ensure_resources().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_embedded_stopwords_are_complete() {
        let resources = ensure_resources().unwrap();
        assert_eq!(resources.stopwords().len(), 179);
        assert!(resources.stopwords().contains("the"));
        assert!(resources.stopwords().contains("wouldn't"));
    }

    #[test]
    fn test_embedded_noun_index_holds_base_forms() {
        let index = ensure_resources().unwrap().noun_index();
        for noun in ["feeling", "tear", "chaos", "series", "news"] {
            assert!(index.contains(noun), "{noun} missing from noun index");
        }
        for fragment in ["alway", "chao", "sery", "specy", "new"] {
            assert!(!index.contains(fragment), "{fragment} must not be a noun");
        }
    }

    #[test]
    fn test_comments_and_blank_lines_are_ignored() {
        let resources =
            NlpResources::from_sources("# header\n\nthe\n  a  \n", "", "# nouns\ndog\n").unwrap();
        assert_eq!(resources.stopwords().len(), 2);
        assert!(resources.stopwords().contains("a"));
        assert_eq!(resources.noun_index().len(), 1);
    }

    #[test]
    fn test_bad_noun_index_line_is_rejected() {
        let err = NlpResources::from_sources("", "", "dog\nhot dog\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_bad_exception_line_is_rejected() {
        let err = NlpResources::from_sources("", "children child extra\n", "").unwrap_err();
        assert!(matches!(err, Error::Resource(_)));
    }
}
