//! Web surface: the analyzer page and a small JSON API.

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub mod chart;
pub mod handlers;
pub mod page;

pub use chart::BarChart;
pub use page::{PageRenderer, PageView};

use crate::analysis::TextAnalyzer;
use crate::config::AppConfig;
use crate::error::{Error, Result};

/// State shared by every request.
pub struct AppState {
    pub analyzer: Arc<TextAnalyzer>,
    pub renderer: PageRenderer,
}

impl AppState {
    pub fn new(analyzer: TextAnalyzer) -> Result<Self> {
        Ok(Self {
            analyzer: Arc::new(analyzer),
            renderer: PageRenderer::new()?,
        })
    }
}

pub fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/analyze", post(handlers::analyze_form))
        .route("/api/analyze", post(handlers::analyze_json))
        .route("/api/health", get(handlers::health_check))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// HTTP status used when `err` ends a request.
pub fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::BlankInput => StatusCode::UNPROCESSABLE_ENTITY,
        Error::UnsupportedUpload(_) | Error::InvalidEncoding(_) | Error::InvalidInputMode(_) => {
            StatusCode::BAD_REQUEST
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub struct WebServer {
    config: AppConfig,
    state: Arc<AppState>,
}

impl WebServer {
    pub fn new(config: AppConfig, analyzer: TextAnalyzer) -> Result<Self> {
        Ok(Self {
            config,
            state: Arc::new(AppState::new(analyzer)?),
        })
    }

    pub async fn start(self) -> Result<()> {
        let addr = self.config.socket_addr()?;
        let app = build_router(self.state, self.config.server.max_upload_bytes);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Moodscope listening on http://{}", listener.local_addr()?);
        info!(
            "Emotion dictionary: {}",
            self.config.dictionary_path.display()
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&Error::BlankInput), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            status_for(&Error::InvalidEncoding("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&Error::InvalidInputMode("voice".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&Error::MissingResource {
                path: "emotion.txt".into()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
