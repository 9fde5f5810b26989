// TOML config adapter - Configuration management using TOML files

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "mediafix.toml";

/// Environment variables consulted after the config file
pub const ENV_EXIFTOOL: &str = "MEDIAFIX_EXIFTOOL";
pub const ENV_FFPROBE: &str = "MEDIAFIX_FFPROBE";
pub const ENV_FFMPEG: &str = "MEDIAFIX_FFMPEG";
pub const ENV_CRF: &str = "MEDIAFIX_CRF";
pub const ENV_PRESET: &str = "MEDIAFIX_PRESET";
pub const ENV_LOG_LEVEL: &str = "MEDIAFIX_LOG_LEVEL";
pub const ENV_ON_ERROR: &str = "MEDIAFIX_ON_ERROR";
pub const ENV_REPLACE: &str = "MEDIAFIX_REPLACE";

/// Full application configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    pub tools: ToolPaths,
    pub encode: EncodeConfig,
    pub batch: BatchConfig,
}

/// Programs to execute for each external tool
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToolPaths {
    pub exiftool: PathBuf,
    pub ffprobe: PathBuf,
    pub ffmpeg: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EncodeConfig {
    pub crf: u8,
    pub preset: String,
    pub suffix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub on_error: BatchPolicy,
    pub replace: ReplaceStrategy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            tools: ToolPaths::default(),
            encode: EncodeConfig::default(),
            batch: BatchConfig::default(),
        }
    }
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            exiftool: PathBuf::from("exiftool"),
            ffprobe: PathBuf::from("ffprobe"),
            ffmpeg: PathBuf::from("ffmpeg"),
        }
    }
}

impl Default for EncodeConfig {
    fn default() -> Self {
        let params = EncodeParams::default();
        Self {
            crf: params.crf,
            preset: params.preset,
            suffix: DEFAULT_TRANSCODE_SUFFIX.to_string(),
        }
    }
}

impl AppConfig {
    /// Encode parameters with the configured quality settings applied
    pub fn encode_params(&self) -> EncodeParams {
        EncodeParams {
            crf: self.encode.crf,
            preset: self.encode.preset.clone(),
            ..EncodeParams::default()
        }
    }

    /// Apply overrides from environment variables looked up through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<usize, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut applied = 0;

        if let Some(value) = lookup(ENV_EXIFTOOL) {
            self.tools.exiftool = PathBuf::from(value);
            applied += 1;
        }
        if let Some(value) = lookup(ENV_FFPROBE) {
            self.tools.ffprobe = PathBuf::from(value);
            applied += 1;
        }
        if let Some(value) = lookup(ENV_FFMPEG) {
            self.tools.ffmpeg = PathBuf::from(value);
            applied += 1;
        }
        if let Some(value) = lookup(ENV_CRF) {
            self.encode.crf = value.trim().parse().map_err(|e| {
                DomainError::Config(format!("Invalid {} value '{}': {}", ENV_CRF, value, e))
            })?;
            applied += 1;
        }
        if let Some(value) = lookup(ENV_PRESET) {
            self.encode.preset = value;
            applied += 1;
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            self.log_level = value;
            applied += 1;
        }
        if let Some(value) = lookup(ENV_ON_ERROR) {
            self.batch.on_error = BatchPolicy::parse(&value)
                .map_err(|e| DomainError::Config(format!("{}: {}", ENV_ON_ERROR, e)))?;
            applied += 1;
        }
        if let Some(value) = lookup(ENV_REPLACE) {
            self.batch.replace = ReplaceStrategy::parse(&value)
                .map_err(|e| DomainError::Config(format!("{}: {}", ENV_REPLACE, e)))?;
            applied += 1;
        }

        Ok(applied)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.encode.crf > 51 {
            return Err(DomainError::Config(
                "CRF value cannot exceed 51".to_string(),
            ));
        }
        if self.encode.preset.trim().is_empty() {
            return Err(DomainError::Config("Preset cannot be empty".to_string()));
        }
        if self.encode.suffix.is_empty() || self.encode.suffix.contains(['/', '\\']) {
            return Err(DomainError::Config(format!(
                "Invalid transcode suffix: '{}'",
                self.encode.suffix
            )));
        }
        for (name, path) in [
            ("exiftool", &self.tools.exiftool),
            ("ffprobe", &self.tools.ffprobe),
            ("ffmpeg", &self.tools.ffmpeg),
        ] {
            if path.as_os_str().is_empty() {
                return Err(DomainError::Config(format!("Empty path for {}", name)));
            }
        }
        Ok(())
    }
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Parse configuration from TOML text; missing keys take defaults
    pub fn parse(content: &str) -> Result<AppConfig, DomainError> {
        toml::from_str(content)
            .map_err(|e| DomainError::Config(format!("Failed to parse TOML config: {}", e)))
    }

    /// Load configuration from a file that must exist
    pub fn load(path: &Path) -> Result<AppConfig, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content)
    }
}
