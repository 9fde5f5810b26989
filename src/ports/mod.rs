// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for the metadata editor
#[async_trait]
pub trait MetadataPort: Send + Sync {
    /// Copy the capture timestamp into file creation and modification times,
    /// recursively under `path`. Returns the tool's standard output.
    async fn rewrite_timestamps(&self, path: &Path) -> Result<String, DomainError>;
}

/// Port for media probing
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Read the `rotate` tag of the first video stream, if present
    async fn probe_rotation_tag(&self, file: &Path) -> Result<Option<String>, DomainError>;

    /// Read the side data list of the first video stream
    async fn probe_side_data(&self, file: &Path) -> Result<Vec<SideDataEntry>, DomainError>;
}

/// Port for video re-encoding
#[async_trait]
pub trait EncodePort: Send + Sync {
    /// Re-encode `input` into `output`
    async fn encode(
        &self,
        input: &Path,
        output: &Path,
        params: &EncodeParams,
    ) -> Result<(), DomainError>;
}

/// Port for file system operations
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Regular files directly inside `dir`, in enumeration order
    async fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, DomainError>;

    /// Delete file
    async fn delete_file(&self, file: &Path) -> Result<(), DomainError>;

    /// Rename file, replacing `to` if it exists
    async fn rename_file(&self, from: &Path, to: &Path) -> Result<(), DomainError>;
}

/// Port for user-facing batch progress
pub trait ProgressPort: Send + Sync {
    /// The directory held no video candidates
    fn no_videos(&self, dir: &Path);

    /// About to check a candidate's rotation
    fn checking(&self, candidate: &VideoCandidate);

    /// A rotated candidate was re-encoded
    fn transcoded(&self, output: &TranscodeOutput);

    /// Re-encoding or replacing a candidate failed
    fn failed(&self, candidate: &VideoCandidate, error: &DomainError);
}
