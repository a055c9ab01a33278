//! User input validation.
//!
//! Text reaches the analyzer either typed into the page or as an uploaded
//! `.txt` file. Both paths end in the same [`InputText`], so identical
//! contents always produce identical analyses.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// How the user supplied their text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Text,
    File,
}

impl std::str::FromStr for InputMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "file" => Ok(Self::File),
            other => Err(Error::InvalidInputMode(other.to_string())),
        }
    }
}

/// Non-blank text ready for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputText(String);

impl InputText {
    /// Accept typed text; blank or whitespace-only text is rejected.
    pub fn from_text(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::BlankInput);
        }
        Ok(Self(text))
    }

    /// Accept an uploaded file. Only `.txt` files holding UTF-8 text are
    /// allowed.
    pub fn from_upload(filename: &str, bytes: &[u8]) -> Result<Self> {
        if !is_text_file(filename) {
            return Err(Error::UnsupportedUpload(format!(
                "'{filename}' is not a .txt file"
            )));
        }
        let text = std::str::from_utf8(bytes).map_err(|e| {
            Error::InvalidEncoding(format!("'{filename}' is not valid UTF-8: {e}"))
        })?;
        Self::from_text(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_text_file(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_rejected() {
        for blank in ["", "   ", "\n\t  \r\n"] {
            assert!(matches!(InputText::from_text(blank), Err(Error::BlankInput)));
        }
    }

    #[test]
    fn test_text_is_kept_verbatim() {
        let input = InputText::from_text("  I am so happy today  ").unwrap();
        assert_eq!(input.as_str(), "  I am so happy today  ");
    }

    #[test]
    fn test_upload_matches_typed_text() {
        let text = "I am so happy today.\nSecond line!";
        let typed = InputText::from_text(text).unwrap();
        let uploaded = InputText::from_upload("notes.txt", text.as_bytes()).unwrap();
        assert_eq!(typed, uploaded);
    }

    #[test]
    fn test_upload_extension_is_case_insensitive() {
        assert!(InputText::from_upload("NOTES.TXT", b"hello there").is_ok());
    }

    #[test]
    fn test_non_txt_upload_is_rejected() {
        for name in ["notes.pdf", "notes", "notes.txt.exe"] {
            let err = InputText::from_upload(name, b"hello").unwrap_err();
            assert!(matches!(err, Error::UnsupportedUpload(_)), "{name}");
        }
    }

    #[test]
    fn test_invalid_utf8_upload_is_rejected() {
        let err = InputText::from_upload("notes.txt", &[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, Error::InvalidEncoding(_)));
    }

    #[test]
    fn test_blank_upload_is_a_warning() {
        let err = InputText::from_upload("empty.txt", b"  \n").unwrap_err();
        assert!(err.is_warning());
    }

    #[test]
    fn test_input_mode_parsing() {
        assert_eq!("text".parse::<InputMode>().unwrap(), InputMode::Text);
        assert_eq!("file".parse::<InputMode>().unwrap(), InputMode::File);
        let err = "voice".parse::<InputMode>().unwrap_err();
        assert!(matches!(err, Error::InvalidInputMode(ref mode) if mode == "voice"));
    }
}
