use once_cell::sync::Lazy;
use regex::Regex;

use super::Tokenizer;

/// Words are runs of non-space, non-punctuation characters; any punctuation
/// left over (ASCII punctuation is normally stripped before tokenizing)
/// becomes a token of its own.
static WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\s\p{P}]+|\p{P}").expect("Valid regex pattern"));

/// Fused words split into two tokens, as the Penn Treebank tokenizer does.
/// The flag marks splits that only apply when whitespace follows.
const FUSED_WORDS: &[(&str, usize, bool)] = &[
    ("cannot", 3, false),
    ("gimme", 3, false),
    ("gonna", 3, false),
    ("gotta", 3, false),
    ("lemme", 3, false),
    ("wanna", 3, true),
];

/// English word tokenizer splitting on whitespace and word boundaries.
///
/// Fused forms like "cannot" or "gonna" come out as two tokens ("can"
/// "not", "gon" "na").
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for m in WORD_REGEX.find_iter(text) {
            let word = m.as_str();
            let followed_by_space = text[m.end()..].starts_with(char::is_whitespace);
            let split = FUSED_WORDS.iter().find(|(fused, _, needs_space)| {
                word.eq_ignore_ascii_case(fused) && (!needs_space || followed_by_space)
            });
            match split {
                Some((_, at, _)) => {
                    let (head, tail) = word.split_at(*at);
                    tokens.push(head.to_string());
                    tokens.push(tail.to_string());
                }
                None => tokens.push(word.to_string()),
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_any_whitespace() {
        let tokens = WordTokenizer.tokenize("i am\tso\nhappy  today");
        assert_eq!(tokens, vec!["i", "am", "so", "happy", "today"]);
    }

    #[test]
    fn test_empty_and_blank_text_yield_no_tokens() {
        assert!(WordTokenizer.tokenize("").is_empty());
        assert!(WordTokenizer.tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_unicode_punctuation_is_split_off() {
        let tokens = WordTokenizer.tokenize("“joyful” day…");
        assert_eq!(tokens, vec!["“", "joyful", "”", "day", "…"]);
    }

    #[test]
    fn test_fused_words_are_split() {
        let tokens = WordTokenizer.tokenize("i cannot stay gonna leave");
        assert_eq!(tokens, vec!["i", "can", "not", "stay", "gon", "na", "leave"]);

        let tokens = WordTokenizer.tokenize("Cannot");
        assert_eq!(tokens, vec!["Can", "not"]);
    }

    #[test]
    fn test_wanna_splits_only_before_whitespace() {
        assert_eq!(
            WordTokenizer.tokenize("i wanna go"),
            vec!["i", "wan", "na", "go"]
        );
        assert_eq!(WordTokenizer.tokenize("i wanna"), vec!["i", "wanna"]);
    }

    #[test]
    fn test_non_ascii_letters_stay_in_words() {
        let tokens = WordTokenizer.tokenize("café naïve");
        assert_eq!(tokens, vec!["café", "naïve"]);
    }
}
