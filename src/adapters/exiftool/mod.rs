//! ExifTool adapter for timestamp rewriting

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::adapters::process::ToolCommand;
use crate::domain::errors::*;
use crate::ports::*;

/// Tag whose value is copied into the file times
pub const CAPTURE_TIME_TAG: &str = "DateTimeOriginal";

/// ExifTool-based metadata adapter
pub struct ExifToolAdapter {
    program: PathBuf,
}

impl ExifToolAdapter {
    /// Use `exiftool` from `PATH`
    pub fn new() -> Self {
        Self::with_path("exiftool")
    }

    pub fn with_path(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for a recursive, verbose capture-time copy under `path`
    pub fn timestamp_args(path: &Path) -> Vec<OsString> {
        vec![
            format!("-FileCreateDate<{}", CAPTURE_TIME_TAG).into(),
            format!("-FileModifyDate<{}", CAPTURE_TIME_TAG).into(),
            "-v2".into(),
            "-r".into(),
            path.as_os_str().to_os_string(),
        ]
    }
}

impl Default for ExifToolAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataPort for ExifToolAdapter {
    async fn rewrite_timestamps(&self, path: &Path) -> Result<String, DomainError> {
        info!("Rewriting file times from {} under {}", CAPTURE_TIME_TAG, path.display());
        let output = ToolCommand::new("exiftool", &self.program)
            .args(Self::timestamp_args(path))
            .run()
            .await?;
        Ok(output.stdout)
    }
}
