// Adapters - External system implementations

pub mod console_progress;
pub mod exec_ffmpeg;
pub mod exiftool;
pub mod fs_local;
pub mod probe_ffprobe;
pub mod process;
pub mod toml_config;
pub mod tracing_log;

// Re-export adapters
pub use console_progress::ConsoleProgressAdapter;
pub use exec_ffmpeg::FFmpegAdapter;
pub use exiftool::ExifToolAdapter;
pub use fs_local::LocalFsAdapter;
pub use probe_ffprobe::FFprobeAdapter;
pub use toml_config::{AppConfig, TomlConfigAdapter};
pub use tracing_log::{LogFormat, LoggingConfig};
