use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::AppConfig;
use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "moodscope.toml";

/// Per-user configuration directory, if the platform has one.
pub fn user_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "moodscope", "moodscope").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Locates and reads the configuration file, then applies environment
/// overrides.
///
/// Search order: the explicit path, `moodscope.toml` in the working
/// directory, then `config.toml` in the per-user config directory. Only an
/// explicit path is required to exist.
pub struct ConfigLoader {
    explicit: Option<PathBuf>,
    working_dir: PathBuf,
    user_dir: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self {
            explicit,
            working_dir: PathBuf::from("."),
            user_dir: user_config_dir(),
        }
    }

    pub fn with_search_dirs(mut self, working_dir: PathBuf, user_dir: Option<PathBuf>) -> Self {
        self.working_dir = working_dir;
        self.user_dir = user_dir;
        self
    }

    /// The file that will be read, if any.
    pub fn config_path(&self) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.explicit {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Some(path.clone()));
        }

        let local = self.working_dir.join(CONFIG_FILE_NAME);
        if local.exists() {
            return Ok(Some(local));
        }

        Ok(self
            .user_dir
            .as_ref()
            .map(|dir| dir.join("config.toml"))
            .filter(|path| path.exists()))
    }

    pub fn load(&self) -> Result<AppConfig> {
        self.load_with_env(|key| std::env::var(key).ok())
    }

    pub fn load_with_env<F>(&self, lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match self.config_path()? {
            Some(path) => read_config(&path)?,
            None => {
                debug!("No configuration file found, using defaults");
                AppConfig::default()
            }
        };
        config.merge_env_with(lookup)?;
        Ok(config)
    }
}

fn read_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = AppConfig::from_toml(&content)
        .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::MalformedLinePolicy;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults_when_no_file_exists() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader::new(None).with_search_dirs(dir.path().to_path_buf(), None);
        assert_eq!(loader.config_path().unwrap(), None);
        assert_eq!(loader.load_with_env(no_env).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_working_dir_file_wins_over_user_dir() {
        let cwd = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        std::fs::write(cwd.path().join(CONFIG_FILE_NAME), "[server]\nport = 9001\n").unwrap();
        std::fs::write(user.path().join("config.toml"), "[server]\nport = 9002\n").unwrap();

        let loader = ConfigLoader::new(None)
            .with_search_dirs(cwd.path().to_path_buf(), Some(user.path().to_path_buf()));
        assert_eq!(loader.load_with_env(no_env).unwrap().server.port, 9001);
    }

    #[test]
    fn test_user_dir_is_used_as_fallback() {
        let cwd = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        std::fs::write(user.path().join("config.toml"), "malformed_lines = \"skip\"\n").unwrap();

        let loader = ConfigLoader::new(None)
            .with_search_dirs(cwd.path().to_path_buf(), Some(user.path().to_path_buf()));
        let config = loader.load_with_env(no_env).unwrap();
        assert_eq!(config.malformed_lines, MalformedLinePolicy::Skip);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader::new(Some(dir.path().join("nope.toml")));
        assert!(matches!(loader.load_with_env(no_env), Err(Error::Config(_))));
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "dictionary_path = \"from-file.txt\"\n").unwrap();

        let loader = ConfigLoader::new(Some(path));
        let config = loader
            .load_with_env(|key| {
                (key == "MOODSCOPE_DICTIONARY").then(|| "from-env.txt".to_string())
            })
            .unwrap();
        assert_eq!(config.dictionary_path, PathBuf::from("from-env.txt"));
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "server = [").unwrap();

        let err = ConfigLoader::new(Some(path)).load_with_env(no_env).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }
}
