//! CLI argument structures

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Analyze the sentiment and emotional tone of text
#[derive(Parser)]
#[command(name = "moodscope")]
#[command(about = "moodscope - Sentiment and emotion analysis for free-form text", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file (default: ./moodscope.toml, then the user config dir)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the analyzer web page
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short = 'p', long)]
        port: Option<u16>,

        /// Emotion dictionary file (word:emotion per line)
        #[arg(short = 'd', long)]
        dictionary: Option<PathBuf>,
    },
    /// Analyze text or a .txt file and print the result
    Analyze {
        /// Text to analyze
        #[arg(conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from a .txt file instead
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,

        /// Emotion dictionary file (word:emotion per line)
        #[arg(short = 'd', long)]
        dictionary: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
