use std::sync::Arc;

use crate::adapters::{
    AppConfig, ConsoleProgressAdapter, ExifToolAdapter, FFmpegAdapter, FFprobeAdapter,
    LocalFsAdapter,
};
use crate::app::{rotation_interactor::RotationInteractor, timestamp_interactor::TimestampInteractor};
use crate::ports::{EncodePort, FsPort, MetadataPort, ProbePort, ProgressPort};

pub trait AppContainer: Send + Sync {
    fn timestamp_interactor(&self) -> Arc<TimestampInteractor>;
    fn rotation_interactor(&self) -> Arc<RotationInteractor>;
}

/// Wires the real adapters together from configuration
pub struct DefaultAppContainer {
    timestamp_interactor: Arc<TimestampInteractor>,
    rotation_interactor: Arc<RotationInteractor>,
}

impl DefaultAppContainer {
    pub fn new(config: &AppConfig) -> Self {
        let metadata_port = Arc::new(ExifToolAdapter::with_path(&config.tools.exiftool));
        let probe_port = Arc::new(FFprobeAdapter::with_path(&config.tools.ffprobe));
        let encode_port = Arc::new(FFmpegAdapter::with_path(&config.tools.ffmpeg));
        let fs_port = Arc::new(LocalFsAdapter::new());
        let progress_port = Arc::new(ConsoleProgressAdapter::new());

        let timestamp_interactor = Arc::new(TimestampInteractor::new(
            metadata_port as Arc<dyn MetadataPort>,
        ));

        let rotation_interactor = Arc::new(RotationInteractor::new(
            probe_port as Arc<dyn ProbePort>,
            encode_port as Arc<dyn EncodePort>,
            fs_port as Arc<dyn FsPort>,
            progress_port as Arc<dyn ProgressPort>,
        ));

        Self {
            timestamp_interactor,
            rotation_interactor,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn timestamp_interactor(&self) -> Arc<TimestampInteractor> {
        Arc::clone(&self.timestamp_interactor)
    }

    fn rotation_interactor(&self) -> Arc<RotationInteractor> {
        Arc::clone(&self.rotation_interactor)
    }
}
