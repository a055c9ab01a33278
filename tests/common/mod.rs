//! Common test utilities and helpers
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small dictionary in the quoted, comma-terminated format the tool ships with.
pub const SAMPLE_DICTIONARY: &str = "\
'happy': 'joy',
'joyful': 'joy',
'sad': 'sadness',
'angry': 'anger',
'movie': 'entertained',
'friend': 'attached',
'terrible': 'fearful',
";

/// Temporary working directory holding an emotion dictionary
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let workspace = Self {
            temp_dir: TempDir::new().expect("create temp dir"),
        };
        workspace.write("emotion.txt", SAMPLE_DICTIONARY);
        workspace
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn dictionary(&self) -> PathBuf {
        self.path().join("emotion.txt")
    }

    /// Write `content` to `name` inside the workspace and return its path
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create test dir");
        }
        fs::write(&path, content).expect("write test file");
        path
    }
}
