// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::errors::DomainError;
use crate::domain::rules::VideoFileFilter;

/// File extensions (lowercase, without the dot) treated as video files
pub const VIDEO_EXTENSIONS: [&str; 9] = [
    "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "m4v", "3gp",
];

/// Default token inserted before the extension of a transcode output
pub const DEFAULT_TRANSCODE_SUFFIX: &str = "_trans";

/// A caller-supplied path that is known to exist
#[derive(Debug, Clone, PartialEq)]
pub struct TargetPath {
    path: PathBuf,
}

impl TargetPath {
    /// Create a target path, failing if nothing exists at `path`
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if !path.exists() {
            return Err(DomainError::PathNotFound(path));
        }
        Ok(Self { path })
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// A regular file whose extension is in the video allow-list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCandidate {
    path: PathBuf,
}

impl VideoCandidate {
    /// Build a candidate from a file path, if its extension qualifies
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        if VideoFileFilter::has_video_extension(&path) {
            Some(Self { path })
        } else {
            None
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for VideoCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Rotation a player applies to decoded frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    /// No rotation, nothing to do
    #[default]
    None,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Map a whole number of degrees onto a rotation
    pub fn from_degrees(degrees: i64) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::None),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    pub fn degrees(&self) -> u16 {
        match self {
            Rotation::None => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Whether the file needs re-encoding
    pub fn is_rotated(&self) -> bool {
        *self != Rotation::None
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// One element of a stream's `side_data_list` as reported by the prober
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SideDataEntry {
    #[serde(default)]
    pub side_data_type: Option<String>,
    #[serde(default)]
    pub rotation: Option<f64>,
}

#[cfg(test)]
impl SideDataEntry {
    pub fn display_matrix(rotation: f64) -> Self {
        Self {
            side_data_type: Some("Display Matrix".to_string()),
            rotation: Some(rotation),
        }
    }
}

/// Parameters for the re-encode of a rotated file
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeParams {
    /// Audio codec, `copy` keeps the stream as-is
    pub audio_codec: String,
    /// Constant Rate Factor (0-51)
    pub crf: u8,
    /// Encoder speed/efficiency preset
    pub preset: String,
    /// Encoder log level
    pub log_level: String,
    /// Overwrite an existing output file
    pub overwrite: bool,
}

impl Default for EncodeParams {
    fn default() -> Self {
        Self {
            audio_codec: "copy".to_string(),
            crf: 23,
            preset: "medium".to_string(),
            log_level: "error".to_string(),
            overwrite: true,
        }
    }
}

impl EncodeParams {
    /// Validate encode parameters
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.crf > 51 {
            return Err(DomainError::BadArgs(format!(
                "CRF must be between 0 and 51, got {}",
                self.crf
            )));
        }
        if self.preset.trim().is_empty() {
            return Err(DomainError::BadArgs("Preset cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// A finished re-encode: `output` was produced from `input`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeOutput {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// What to do with the rest of the batch after an encode failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BatchPolicy {
    /// Stop at the first failure
    #[default]
    #[serde(rename = "abort")]
    AbortOnError,
    /// Record the failure and move on
    #[serde(rename = "continue")]
    ContinueOnError,
}

impl BatchPolicy {
    /// Parse batch policy from string
    pub fn parse(policy: &str) -> Result<Self, DomainError> {
        match policy.trim().to_lowercase().as_str() {
            "abort" => Ok(BatchPolicy::AbortOnError),
            "continue" => Ok(BatchPolicy::ContinueOnError),
            other => Err(DomainError::BadArgs(format!(
                "Invalid batch policy: {}. Valid policies: abort, continue",
                other
            ))),
        }
    }
}

/// How a transcode output takes the place of its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplaceStrategy {
    /// Remove the input, then rename the output. Not crash-safe.
    #[default]
    DeleteThenRename,
    /// Rename the output over the input in one step
    RenameOver,
}

impl ReplaceStrategy {
    pub fn parse(strategy: &str) -> Result<Self, DomainError> {
        match strategy.trim().to_lowercase().as_str() {
            "delete-then-rename" => Ok(ReplaceStrategy::DeleteThenRename),
            "rename-over" => Ok(ReplaceStrategy::RenameOver),
            other => Err(DomainError::BadArgs(format!(
                "Invalid replace strategy: {}. Valid strategies: delete-then-rename, rename-over",
                other
            ))),
        }
    }
}

/// Request to copy capture timestamps into file times
#[derive(Debug, Clone)]
pub struct TimestampRequest {
    pub target: TargetPath,
}

/// Result of a timestamp rewrite
#[derive(Debug, Clone)]
pub struct TimestampReport {
    /// Captured standard output of the metadata tool
    pub stdout: String,
}

/// Request to fix rotated videos in a directory
#[derive(Debug, Clone)]
pub struct RotationRequest {
    pub directory: PathBuf,
    pub encode: EncodeParams,
    pub suffix: String,
    pub policy: BatchPolicy,
    pub replace: ReplaceStrategy,
}

impl RotationRequest {
    /// Request with the default encode settings and batch behavior
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            encode: EncodeParams::default(),
            suffix: DEFAULT_TRANSCODE_SUFFIX.to_string(),
            policy: BatchPolicy::default(),
            replace: ReplaceStrategy::default(),
        }
    }

    /// Validate request parameters
    pub fn validate(&self) -> Result<(), DomainError> {
        self.encode.validate()?;
        if self.suffix.is_empty() {
            return Err(DomainError::BadArgs(
                "Transcode suffix cannot be empty".to_string(),
            ));
        }
        if self.suffix.contains(['/', '\\']) {
            return Err(DomainError::BadArgs(format!(
                "Transcode suffix must not contain path separators: {}",
                self.suffix
            )));
        }
        Ok(())
    }
}

/// Outcome of a rotation-fixing run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Candidates whose rotation was checked
    pub inspected: usize,
    /// Files that were re-encoded and replaced
    pub transcoded: Vec<PathBuf>,
    /// Candidates with no rotation
    pub skipped: usize,
    /// Failures recorded when continuing past errors
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
