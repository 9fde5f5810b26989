// Timestamp interactor - Orchestrates the capture-time copy use case

use std::sync::Arc;

use tracing::info;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Interactor for copying capture timestamps into file times
pub struct TimestampInteractor {
    metadata_port: Arc<dyn MetadataPort>,
}

impl TimestampInteractor {
    /// Create new timestamp interactor with injected ports
    pub fn new(metadata_port: Arc<dyn MetadataPort>) -> Self {
        Self { metadata_port }
    }

    /// Rewrite file times under the target. The whole tree succeeds or fails
    /// as one; there is no per-file reporting.
    pub async fn execute(&self, request: TimestampRequest) -> Result<TimestampReport, DomainError> {
        info!("Starting timestamp rewrite for: {}", request.target);

        let stdout = self
            .metadata_port
            .rewrite_timestamps(request.target.as_path())
            .await?;

        info!("Timestamp rewrite completed");
        Ok(TimestampReport { stdout })
    }
}
