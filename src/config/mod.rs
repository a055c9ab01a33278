use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::dictionary::MalformedLinePolicy;
use crate::error::{Error, Result};

pub mod loader;

pub use loader::ConfigLoader;

pub const DEFAULT_DICTIONARY: &str = "emotion.txt";
pub const DEFAULT_PORT: u16 = 8501;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Emotion dictionary file, one `word:emotion` entry per line.
    pub dictionary_path: PathBuf,
    pub malformed_lines: MalformedLinePolicy,
    pub log_level: Option<String>,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body, uploads included.
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY),
            malformed_lines: MalformedLinePolicy::Fail,
            log_level: Some("info".to_string()),
            server: ServerConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: 2 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `MOODSCOPE_*` overrides using `lookup` to read variables.
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("MOODSCOPE_DICTIONARY") {
            self.dictionary_path = PathBuf::from(path);
        }

        if let Some(host) = lookup("MOODSCOPE_HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("MOODSCOPE_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::Config(format!("MOODSCOPE_PORT is not a port: '{port}'")))?;
        }

        if let Some(level) = lookup("MOODSCOPE_LOG_LEVEL") {
            self.log_level = Some(level);
        }

        if let Some(policy) = lookup("MOODSCOPE_MALFORMED_LINES") {
            self.malformed_lines = policy.parse()?;
        }

        Ok(())
    }

    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_with(|key| std::env::var(key).ok())
    }

    pub fn validate(&self) -> Result<()> {
        if self.dictionary_path.as_os_str().is_empty() {
            return Err(Error::Config("dictionary_path must not be empty".to_string()));
        }
        if self.server.port == 0 {
            return Err(Error::Config("server.port must be non-zero".to_string()));
        }
        if self.server.max_upload_bytes == 0 {
            return Err(Error::Config(
                "server.max_upload_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Anchor a relative dictionary path at `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        if self.dictionary_path.is_relative() {
            self.dictionary_path = base.join(&self.dictionary_path);
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|_| {
                Error::Config(format!(
                    "invalid listen address {}:{}",
                    self.server.host, self.server.port
                ))
            })
    }
}
