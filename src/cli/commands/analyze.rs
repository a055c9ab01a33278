//! One-shot analysis from the command line.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::analysis::{Analysis, EmotionCount, PolarityScores, SentimentLabel, TextAnalyzer};
use crate::cli::args::OutputFormat;
use crate::config::AppConfig;
use crate::input::InputText;

/// Parameters for the analyze command
pub struct AnalyzeParams {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Analyze the given text or file and print the result to stdout.
///
/// Blank input is a warning, not a failure: it goes to stderr and the
/// command still succeeds.
pub fn run_analyze_command(config: &AppConfig, params: AnalyzeParams) -> Result<()> {
    let input = match read_input(&params) {
        Ok(input) => input,
        Err(e) => match e.downcast_ref::<crate::Error>() {
            Some(inner) if inner.is_warning() => {
                eprintln!("Warning: {inner}");
                return Ok(());
            }
            _ => return Err(e),
        },
    };

    let analyzer = TextAnalyzer::builder(&config.dictionary_path)
        .malformed_lines(config.malformed_lines)
        .build()
        .context("Failed to set up analyzer")?;
    let analysis = analyzer.analyze(input.as_str())?;

    let output = match params.format {
        OutputFormat::Human => format_human(&analysis),
        OutputFormat::Json => format_json(&analysis)?,
    };
    print!("{output}");
    Ok(())
}

fn read_input(params: &AnalyzeParams) -> Result<InputText> {
    match &params.file {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(InputText::from_upload(&filename, &bytes)?)
        }
        None => Ok(InputText::from_text(
            params.text.clone().unwrap_or_default(),
        )?),
    }
}

pub fn format_human(analysis: &Analysis) -> String {
    let mut out = String::new();
    let scores = &analysis.scores;
    let _ = writeln!(out, "Sentiment: {}", analysis.sentiment);
    let _ = writeln!(
        out,
        "Scores: neg {:.3}, neu {:.3}, pos {:.3}, compound {:.4}",
        scores.neg, scores.neu, scores.pos, scores.compound
    );

    let rows = analysis.tally.sorted();
    if rows.is_empty() {
        let _ = writeln!(out, "Emotions: none found");
        return out;
    }

    let _ = writeln!(out, "Emotions:");
    let width = rows.iter().map(|row| row.emotion.len()).max().unwrap_or(0);
    for row in rows {
        let _ = writeln!(out, "  {:<width$}  {}", row.emotion, row.count);
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    sentiment: SentimentLabel,
    scores: &'a PolarityScores,
    emotions: Vec<EmotionCount>,
    tokens: &'a [String],
}

pub fn format_json(analysis: &Analysis) -> crate::Result<String> {
    let report = JsonReport {
        sentiment: analysis.sentiment,
        scores: &analysis.scores,
        emotions: analysis.tally.sorted(),
        tokens: &analysis.tokens,
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}
