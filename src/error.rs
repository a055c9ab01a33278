use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Emotion dictionary not found: '{}'. Please provide it at the configured path.", .path.display())]
    MissingResource { path: PathBuf },

    #[error("Malformed dictionary entry on line {line}: {content:?} (expected 'word:emotion')")]
    MalformedDictionary { line: usize, content: String },

    #[error("Please provide text or upload a file for analysis.")]
    BlankInput,

    #[error("Unknown input mode '{0}' (expected 'text' or 'file')")]
    InvalidInputMode(String),

    #[error("Unsupported upload: {0}")]
    UnsupportedUpload(String),

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("Resource error: {0}")]
    Resource(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Conditions shown to the user as a warning rather than a failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, Error::BlankInput)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
