//! mediafix
//!
//! Two small command-line helpers for photo and video libraries:
//!
//! - `set-file-times` copies each file's embedded capture time into its
//!   filesystem creation and modification times (via exiftool).
//! - `fix-rotations` finds videos carrying rotation metadata and re-encodes
//!   them in place (via ffprobe and ffmpeg).
//!
//! All media work is done by the external tools; this crate decides what to
//! run and what to do with the result.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::errors::{DomainError, DomainResult};
pub use domain::model::{BatchPolicy, BatchReport, ReplaceStrategy, Rotation, RotationRequest};
