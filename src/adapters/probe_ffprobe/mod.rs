//! FFprobe adapter for media file probing
//!
//! This module queries the first video stream's rotation tag and side data
//! through `ffprobe` JSON output.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;

use crate::adapters::process::ToolCommand;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

const TOOL: &str = "ffprobe";

/// Top level of `ffprobe -of json`
#[derive(Debug, Default, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

#[derive(Debug, Default, Deserialize)]
struct ProbeStream {
    #[serde(default)]
    tags: HashMap<String, serde_json::Value>,
    #[serde(default)]
    side_data_list: Vec<SideDataEntry>,
}

/// FFprobe-based probe adapter
pub struct FFprobeAdapter {
    program: PathBuf,
}

impl FFprobeAdapter {
    /// Use `ffprobe` from `PATH`
    pub fn new() -> Self {
        Self::with_path(TOOL)
    }

    pub fn with_path(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments selecting `entries` of the first video stream as JSON
    pub fn probe_args(entries: &str, file: &Path) -> Vec<OsString> {
        vec![
            "-v".into(),
            "error".into(),
            "-select_streams".into(),
            "v:0".into(),
            "-show_entries".into(),
            entries.into(),
            "-of".into(),
            "json".into(),
            file.as_os_str().to_os_string(),
        ]
    }

    /// Extract the `rotate` tag from the first stream
    pub fn parse_rotation_tag(json: &str) -> Result<Option<String>, DomainError> {
        let output = Self::parse_output(json)?;
        let tag = output
            .streams
            .into_iter()
            .next()
            .and_then(|mut stream| stream.tags.remove("rotate"));

        Ok(match tag {
            Some(serde_json::Value::String(value)) => Some(value),
            Some(serde_json::Value::Number(value)) => Some(value.to_string()),
            _ => None,
        })
    }

    /// Extract the side data list from the first stream
    pub fn parse_side_data(json: &str) -> Result<Vec<SideDataEntry>, DomainError> {
        let output = Self::parse_output(json)?;
        Ok(output
            .streams
            .into_iter()
            .next()
            .map(|stream| stream.side_data_list)
            .unwrap_or_default())
    }

    fn parse_output(json: &str) -> Result<ProbeOutput, DomainError> {
        serde_json::from_str(json).map_err(|e| DomainError::MalformedOutput {
            tool: TOOL.to_string(),
            message: e.to_string(),
        })
    }

    async fn probe(&self, entries: &str, file: &Path) -> Result<String, DomainError> {
        let output = ToolCommand::new(TOOL, &self.program)
            .args(Self::probe_args(entries, file))
            .run()
            .await?;
        Ok(output.stdout)
    }
}

impl Default for FFprobeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProbePort for FFprobeAdapter {
    async fn probe_rotation_tag(&self, file: &Path) -> Result<Option<String>, DomainError> {
        let json = self.probe("stream_tags=rotate", file).await?;
        Self::parse_rotation_tag(&json)
    }

    async fn probe_side_data(&self, file: &Path) -> Result<Vec<SideDataEntry>, DomainError> {
        let json = self.probe("stream_side_data_list", file).await?;
        Self::parse_side_data(&json)
    }
}
