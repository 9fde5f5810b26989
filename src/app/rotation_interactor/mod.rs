// Rotation interactor - Orchestrates rotation detection and re-encoding

use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::ports::*;

/// Interactor for fixing rotated videos in a directory
pub struct RotationInteractor {
    probe_port: Arc<dyn ProbePort>,
    encode_port: Arc<dyn EncodePort>,
    fs_port: Arc<dyn FsPort>,
    progress_port: Arc<dyn ProgressPort>,
}

impl RotationInteractor {
    /// Create new rotation interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        encode_port: Arc<dyn EncodePort>,
        fs_port: Arc<dyn FsPort>,
        progress_port: Arc<dyn ProgressPort>,
    ) -> Self {
        Self {
            probe_port,
            encode_port,
            fs_port,
            progress_port,
        }
    }

    /// Check and fix every video directly inside the request directory.
    ///
    /// Candidates are processed one at a time in directory order. With
    /// [`BatchPolicy::AbortOnError`] the first failed transcode is returned and
    /// later candidates are never probed.
    pub async fn execute(&self, request: RotationRequest) -> Result<BatchReport, DomainError> {
        request.validate()?;
        info!("Scanning {} for rotated videos", request.directory.display());

        let candidates: Vec<VideoCandidate> = self
            .fs_port
            .list_files(&request.directory)
            .await?
            .into_iter()
            .filter_map(VideoCandidate::from_path)
            .collect();

        let mut report = BatchReport::default();
        if candidates.is_empty() {
            self.progress_port.no_videos(&request.directory);
            return Ok(report);
        }
        debug!("Found {} video candidates", candidates.len());

        for candidate in candidates {
            self.progress_port.checking(&candidate);
            report.inspected += 1;

            let rotation = self.detect_rotation(&candidate).await;
            if !rotation.is_rotated() {
                debug!("{} has no rotation", candidate);
                report.skipped += 1;
                continue;
            }

            info!("{} is rotated by {}", candidate, rotation);
            match self.transcode(&candidate, &request).await {
                Ok(_) => report.transcoded.push(candidate.path().to_path_buf()),
                Err(e) => {
                    self.progress_port.failed(&candidate, &e);
                    match request.policy {
                        BatchPolicy::AbortOnError => {
                            debug!("Aborting batch after failure on {}", candidate);
                            return Err(e);
                        }
                        BatchPolicy::ContinueOnError => {
                            warn!("Continuing after failure on {}: {}", candidate, e);
                            report
                                .failures
                                .push((candidate.path().to_path_buf(), e.to_string()));
                        }
                    }
                }
            }
        }

        info!(
            "Batch finished: {} inspected, {} transcoded, {} skipped, {} failed",
            report.inspected,
            report.transcoded.len(),
            report.skipped,
            report.failures.len()
        );
        Ok(report)
    }

    /// Detect the rotation of a candidate.
    ///
    /// The stream tag is consulted first, then the display matrix side data.
    /// Probe errors never escape: a failed stage contributes no rotation.
    pub async fn detect_rotation(&self, candidate: &VideoCandidate) -> Rotation {
        match self.probe_port.probe_rotation_tag(candidate.path()).await {
            Ok(Some(tag)) => {
                if let Some(rotation) = RotationRules::from_stream_tag(&tag) {
                    debug!("{}: rotate tag {}", candidate, tag);
                    return rotation;
                }
            }
            Ok(None) => {}
            Err(e) => debug!(kind = e.kind(), "{}: rotate tag probe failed: {}", candidate, e),
        }

        match self.probe_port.probe_side_data(candidate.path()).await {
            Ok(entries) => {
                if let Some(rotation) = RotationRules::from_side_data(&entries) {
                    debug!("{}: display matrix rotation {}", candidate, rotation);
                    return rotation;
                }
            }
            Err(e) => debug!(kind = e.kind(), "{}: side data probe failed: {}", candidate, e),
        }

        Rotation::None
    }

    /// Re-encode a candidate and put the result in its place.
    ///
    /// The original is only touched after the encoder succeeds. A failed
    /// encode leaves no output behind.
    pub async fn transcode(
        &self,
        candidate: &VideoCandidate,
        request: &RotationRequest,
    ) -> Result<TranscodeOutput, DomainError> {
        let output = TranscodeOutput {
            input: candidate.path().to_path_buf(),
            output: OutputNaming::transcode_output_path(candidate.path(), &request.suffix),
        };

        if let Err(e) = self
            .encode_port
            .encode(&output.input, &output.output, &request.encode)
            .await
        {
            self.discard_partial_output(&output.output).await;
            return Err(e);
        }
        self.progress_port.transcoded(&output);

        match request.replace {
            ReplaceStrategy::DeleteThenRename => {
                // A crash between these two calls loses the source file
                self.fs_port.delete_file(&output.input).await?;
                self.fs_port.rename_file(&output.output, &output.input).await?;
            }
            ReplaceStrategy::RenameOver => {
                self.fs_port.rename_file(&output.output, &output.input).await?;
            }
        }

        debug!("Replaced {} with re-encoded output", output.input.display());
        Ok(output)
    }

    /// Remove whatever the encoder wrote before failing
    async fn discard_partial_output(&self, path: &Path) {
        match self.fs_port.delete_file(path).await {
            Ok(()) => debug!("Removed partial output {}", path.display()),
            Err(DomainError::Fs { source, .. }) if source.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Could not remove partial output {}: {}", path.display(), e),
        }
    }
}
