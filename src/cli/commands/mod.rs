//! Command implementations

pub mod analyze;
pub mod serve;

pub use analyze::{run_analyze_command, AnalyzeParams};
pub use serve::run_serve_command;
