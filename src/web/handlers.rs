use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn, Instrument};
use uuid::Uuid;

use super::{status_for, AppState, PageView};
use crate::analysis::{Analysis, EmotionCount, PolarityScores, SentimentLabel};
use crate::error::{Error, Result};
use crate::input::{InputMode, InputText};

pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    render(&state, &PageView::default(), StatusCode::OK)
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

/// Handle the page form: typed text or an uploaded `.txt` file.
pub async fn analyze_form(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    let form = match AnalyzeForm::read(multipart).await {
        Ok(form) => form,
        Err(e) => {
            warn!("Rejected form submission: {}", e);
            let err = Error::UnsupportedUpload(format!("could not read form: {e}"));
            return render(&state, &PageView::default().with_problem(&err), e.status());
        }
    };

    let mode = match form.mode() {
        Ok(mode) => mode,
        Err(e) => {
            warn!("Rejected form submission: {}", e);
            return render(&state, &PageView::default().with_problem(&e), status_for(&e));
        }
    };

    let view = PageView::with_input(mode, form.text.clone());
    let input = match form.into_input(mode) {
        Ok(input) => input,
        Err(e) => return render_problem(&state, view, &e),
    };

    match run_analysis(&state, input).await {
        Ok(analysis) => render(&state, &view.with_analysis(&analysis), StatusCode::OK),
        Err(e) => render_problem(&state, view, &e),
    }
}

pub async fn analyze_json(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> std::result::Result<Json<AnalysisResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4();
    let input = InputText::from_text(request.text).map_err(|e| api_error(&e))?;

    let analysis = run_analysis(&state, input)
        .instrument(tracing::info_span!("api_analyze", %request_id))
        .await
        .map_err(|e| api_error(&e))?;

    Ok(Json(AnalysisResponse::new(request_id, analysis)))
}

async fn run_analysis(state: &AppState, input: InputText) -> Result<Analysis> {
    let analyzer = Arc::clone(&state.analyzer);
    let analysis = tokio::task::spawn_blocking(move || analyzer.analyze(input.as_str()))
        .await
        .map_err(|e| Error::Io(std::io::Error::other(format!("analysis task failed: {e}"))))??;

    info!(
        sentiment = %analysis.sentiment,
        emotions = analysis.tally.len(),
        matches = analysis.tally.total(),
        "Analyzed input"
    );
    Ok(analysis)
}

fn render(state: &AppState, view: &PageView, status: StatusCode) -> Response {
    match state.renderer.render(view) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

/// Warnings keep a 200 status; the page itself is still a valid answer.
fn render_problem(state: &AppState, view: PageView, err: &Error) -> Response {
    let status = if err.is_warning() {
        StatusCode::OK
    } else {
        error!("Analysis failed: {}", err);
        status_for(err)
    };
    render(state, &view.with_problem(err), status)
}

fn api_error(err: &Error) -> (StatusCode, Json<ErrorResponse>) {
    if !err.is_warning() {
        error!("API analysis failed: {}", err);
    }
    (
        status_for(err),
        Json(ErrorResponse {
            error: err.to_string(),
            warning: err.is_warning(),
        }),
    )
}

struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

/// Fields of the page form.
struct AnalyzeForm {
    mode: Option<String>,
    text: String,
    upload: Option<Upload>,
}

impl AnalyzeForm {
    async fn read(mut multipart: Multipart) -> std::result::Result<Self, MultipartError> {
        let mut form = AnalyzeForm {
            mode: None,
            text: String::new(),
            upload: None,
        };

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "mode" => form.mode = Some(field.text().await?),
                "text" => form.text = field.text().await?,
                "file" => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    // Browsers send an empty part when no file was chosen.
                    if !filename.is_empty() {
                        form.upload = Some(Upload {
                            filename,
                            bytes: bytes.to_vec(),
                        });
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// The selected input mode; a form without one means typed text.
    fn mode(&self) -> Result<InputMode> {
        match self.mode.as_deref() {
            Some(mode) => mode.parse(),
            None => Ok(InputMode::default()),
        }
    }

    fn into_input(self, mode: InputMode) -> Result<InputText> {
        match mode {
            InputMode::Text => InputText::from_text(self.text),
            InputMode::File => match self.upload {
                Some(upload) => InputText::from_upload(&upload.filename, &upload.bytes),
                None => Err(Error::BlankInput),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub request_id: Uuid,
    pub sentiment: SentimentLabel,
    pub scores: PolarityScores,
    pub emotions: Vec<EmotionCount>,
    pub tokens: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisResponse {
    pub fn new(request_id: Uuid, analysis: Analysis) -> Self {
        Self {
            request_id,
            sentiment: analysis.sentiment,
            scores: analysis.scores,
            emotions: analysis.tally.sorted(),
            tokens: analysis.tokens,
            analyzed_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub warning: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
