//! CLI module for mediafix
//!
//! This module handles command-line argument parsing and exit codes for the
//! `set-file-times` and `fix-rotations` binaries.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

pub mod args;
pub mod commands;

pub use args::{CommonArgs, FixArgs};

/// Copy each file's capture time (DateTimeOriginal) into its creation and
/// modification times, recursively, using exiftool.
#[derive(Parser, Debug)]
#[command(name = "set-file-times")]
#[command(about = "Set file times from the embedded capture timestamp")]
#[command(version)]
pub struct SetFileTimesCli {
    /// File or directory to process
    pub path: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Find videos with rotation metadata in a directory and re-encode them in
/// place using ffprobe and ffmpeg.
#[derive(Parser, Debug)]
#[command(name = "fix-rotations")]
#[command(about = "Re-encode rotated videos in a directory")]
#[command(version)]
pub struct FixRotationsCli {
    /// Directory to scan (not recursive)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    #[command(flatten)]
    pub fix: FixArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Print a parse error and map it to an exit code.
///
/// Usage errors exit with 1; `--help` and `--version` exit with 0.
pub fn parse_error_exit(err: clap::Error) -> ExitCode {
    let _ = err.print();
    if err.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Report a failed run at the outermost boundary
pub fn error_exit(err: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {:#}", err);
    ExitCode::FAILURE
}
