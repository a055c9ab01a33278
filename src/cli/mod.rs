//! CLI module for command-line interface components
//!
//! This module contains all CLI-related functionality including argument parsing
//! and command routing.

pub mod args;
pub mod commands;
pub mod help;
pub mod router;

pub use args::{Cli, Commands, OutputFormat};
pub use help::get_log_level;
pub use router::{execute_command, load_config};
