/// Lowercase `text` and drop every ASCII punctuation character.
///
/// Only the 32 ASCII punctuation characters are removed; Unicode
/// punctuation such as curly quotes is left for the tokenizer.
pub fn clean_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}
