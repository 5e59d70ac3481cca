//! File reading and writing utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Replace a file's contents with `text`
    pub fn write_text(path: &Path, text: &str) -> Result<()> {
        fs::write(path, text).with_context(|| format!("Failed to write file: {}", path.display()))
    }
}
