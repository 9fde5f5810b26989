// Local filesystem adapter - Directory listing and file replacement

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;
use walkdir::WalkDir;

use crate::domain::errors::*;
use crate::ports::*;

/// Filesystem adapter over the local disk
#[derive(Debug, Default)]
pub struct LocalFsAdapter;

impl LocalFsAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FsPort for LocalFsAdapter {
    async fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, DomainError> {
        let metadata = std::fs::metadata(dir).map_err(|e| DomainError::fs(dir, e))?;
        if !metadata.is_dir() {
            return Err(DomainError::fs(
                dir,
                io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
            ));
        }

        // Single level, left in the order the filesystem returns entries
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                DomainError::fs(path, io::Error::from(e))
            })?;
            // is_file follows symlinks
            if entry.path().is_file() {
                files.push(entry.into_path());
            }
        }

        debug!("Listed {} files in {}", files.len(), dir.display());
        Ok(files)
    }

    async fn delete_file(&self, file: &Path) -> Result<(), DomainError> {
        tokio::fs::remove_file(file)
            .await
            .map_err(|e| DomainError::fs(file, e))
    }

    async fn rename_file(&self, from: &Path, to: &Path) -> Result<(), DomainError> {
        tokio::fs::rename(from, to)
            .await
            .map_err(|e| DomainError::fs(from, e))
    }
}
