use serde::Serialize;
use tera::{Context, Tera};

use super::chart::BarChart;
use crate::analysis::Analysis;
use crate::error::{Error, Result};
use crate::input::InputMode;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Everything the page template needs for one render.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageView {
    pub mode: InputMode,
    pub text: String,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub result: Option<ResultView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultView {
    pub sentiment: String,
    pub chart: BarChart,
}

impl PageView {
    pub fn with_input(mode: InputMode, text: impl Into<String>) -> Self {
        Self {
            mode,
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_analysis(mut self, analysis: &Analysis) -> Self {
        self.result = Some(ResultView {
            sentiment: analysis.sentiment.to_string(),
            chart: BarChart::from_tally(&analysis.tally),
        });
        self
    }

    /// Show `err` as a warning or an error depending on its kind.
    pub fn with_problem(mut self, err: &Error) -> Self {
        if err.is_warning() {
            self.warning = Some(err.to_string());
        } else {
            self.error = Some(err.to_string());
        }
        self
    }
}

pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template("index.html", INDEX_TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render(&self, view: &PageView) -> Result<String> {
        let mut context = Context::new();
        context.insert("view", view);
        Ok(self.tera.render("index.html", &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{EmotionTally, PolarityScores, SentimentLabel};

    fn analysis(tags: &[&str], sentiment: SentimentLabel) -> Analysis {
        Analysis {
            tally: tags.iter().copied().collect::<EmotionTally>(),
            sentiment,
            scores: PolarityScores::default(),
            tokens: Vec::new(),
        }
    }

    #[test]
    fn test_empty_page_has_form_and_no_result() {
        let html = PageRenderer::new().unwrap().render(&PageView::default()).unwrap();
        assert!(html.contains("Sentiment &amp; Emotion Analyzer"));
        assert!(html.contains("enctype=\"multipart/form-data\""));
        assert!(!html.contains("The sentiment is"));
    }

    #[test]
    fn test_result_renders_label_and_bars() {
        let view = PageView::with_input(InputMode::Text, "so happy")
            .with_analysis(&analysis(&["joy", "joy", "trust"], SentimentLabel::Positive));
        let html = PageRenderer::new().unwrap().render(&view).unwrap();
        assert!(html.contains("The sentiment is: <b>Positive</b>"));
        assert_eq!(html.matches("<rect").count(), 2);
        assert!(html.contains("#6A82FB"));
        assert!(html.contains(">joy</text>"));
    }

    #[test]
    fn test_empty_tally_still_shows_sentiment() {
        let view = PageView::default().with_analysis(&analysis(&[], SentimentLabel::Neutral));
        let html = PageRenderer::new().unwrap().render(&view).unwrap();
        assert!(html.contains("<b>Neutral</b>"));
        assert!(html.contains("No emotion words found."));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let view = PageView::with_input(InputMode::Text, "<script>alert(1)</script>");
        let html = PageRenderer::new().unwrap().render(&view).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_blank_input_shows_warning() {
        let view = PageView::default().with_problem(&Error::BlankInput);
        let html = PageRenderer::new().unwrap().render(&view).unwrap();
        assert!(html.contains("notice warning"));
        assert!(html.contains("Please provide text or upload a file for analysis."));
        assert!(!html.contains("notice error"));
    }

    #[test]
    fn test_missing_dictionary_shows_error() {
        let err = Error::MissingResource {
            path: "emotion.txt".into(),
        };
        let view = PageView::default().with_problem(&err);
        let html = PageRenderer::new().unwrap().render(&view).unwrap();
        assert!(html.contains("notice error"));
        assert!(html.contains("emotion.txt"));
        assert!(!html.contains("The sentiment is"));
    }

    #[test]
    fn test_file_mode_hides_textarea() {
        let view = PageView::with_input(InputMode::File, "");
        let html = PageRenderer::new().unwrap().render(&view).unwrap();
        assert!(html.contains("id=\"text-input\" class=\"hidden\""));
    }
}
