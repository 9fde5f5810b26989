//! FFmpeg execution adapter
//!
//! Re-encodes video while copying audio. Rotation correction is left to
//! ffmpeg's default handling of the input's display metadata.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::adapters::process::ToolCommand;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// FFmpeg-based execution adapter
pub struct FFmpegAdapter {
    program: PathBuf,
}

impl FFmpegAdapter {
    /// Use `ffmpeg` from `PATH`
    pub fn new() -> Self {
        Self::with_path("ffmpeg")
    }

    pub fn with_path(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Build the encoder argument list
    pub fn encode_args(input: &Path, output: &Path, params: &EncodeParams) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-hide_banner".into(),
            "-loglevel".into(),
            params.log_level.clone().into(),
            "-i".into(),
            input.as_os_str().to_os_string(),
            "-c:a".into(),
            params.audio_codec.clone().into(),
            "-crf".into(),
            params.crf.to_string().into(),
            "-preset".into(),
            params.preset.clone().into(),
        ];
        if params.overwrite {
            args.push("-y".into());
        }
        args.push(output.as_os_str().to_os_string());
        args
    }
}

impl Default for FFmpegAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EncodePort for FFmpegAdapter {
    async fn encode(
        &self,
        input: &Path,
        output: &Path,
        params: &EncodeParams,
    ) -> Result<(), DomainError> {
        info!(
            "Encoding {} -> {} (crf {}, preset {})",
            input.display(),
            output.display(),
            params.crf,
            params.preset
        );
        ToolCommand::new("ffmpeg", &self.program)
            .args(Self::encode_args(input, output, params))
            .run()
            .await?;
        Ok(())
    }
}
