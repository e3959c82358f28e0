//! File reading utilities

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::CliError;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }
}

/// One registration attempt from a batch file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistrationRequest {
    /// Requested username
    pub username: String,
    /// Contact address
    pub email: String,
    /// Plain-text password
    pub password: String,
}

/// Read a JSON array of registration requests
pub fn read_requests(path: &Path) -> Result<Vec<RegistrationRequest>> {
    let content = FileReader::read_text(path)?;
    let requests = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse registration requests: {}", path.display()))?;
    Ok(requests)
}
