//! Web server command.

use anyhow::{Context, Result};

use crate::analysis::TextAnalyzer;
use crate::config::AppConfig;
use crate::web::WebServer;

/// Serve the analyzer page until Ctrl+C.
pub async fn run_serve_command(config: AppConfig) -> Result<()> {
    let analyzer = TextAnalyzer::builder(&config.dictionary_path)
        .malformed_lines(config.malformed_lines)
        .build()
        .context("Failed to set up analyzer")?;

    if !config.dictionary_path.exists() {
        tracing::warn!(
            "Emotion dictionary {} does not exist yet; analysis requests will fail until it does",
            config.dictionary_path.display()
        );
    }

    let server = WebServer::new(config, analyzer).context("Failed to set up web server")?;
    server.start().await.context("Web server failed")?;
    Ok(())
}
