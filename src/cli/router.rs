//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli::args::Commands;
use crate::cli::commands::*;
use crate::config::{AppConfig, ConfigLoader};

/// Load configuration from file and environment. Command-line overrides are
/// applied later by [`execute_command`].
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig> {
    ConfigLoader::new(config_path)
        .load()
        .context("Failed to load configuration")
}

/// Execute a CLI command based on the parsed arguments
pub async fn execute_command(command: Commands, mut config: AppConfig) -> Result<()> {
    match command {
        Commands::Serve {
            host,
            port,
            dictionary,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            apply_dictionary(&mut config, dictionary);
            finalize(&mut config)?;
            run_serve_command(config).await
        }
        Commands::Analyze {
            text,
            file,
            dictionary,
            format,
        } => {
            apply_dictionary(&mut config, dictionary);
            finalize(&mut config)?;
            run_analyze_command(&config, AnalyzeParams { text, file, format })
        }
    }
}

fn apply_dictionary(config: &mut AppConfig, dictionary: Option<PathBuf>) {
    if let Some(path) = dictionary {
        config.dictionary_path = path;
    }
}

/// Validate the merged configuration and pin relative paths to the current
/// working directory.
fn finalize(config: &mut AppConfig) -> Result<()> {
    config.validate()?;
    let cwd = std::env::current_dir().context("Failed to read the working directory")?;
    config.resolve_paths(&cwd);
    Ok(())
}
