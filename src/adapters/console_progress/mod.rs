// Console progress adapter - User-facing lines on stdout

use std::path::Path;

use crate::domain::errors::DomainError;
use crate::domain::model::*;
use crate::ports::ProgressPort;

/// Prints batch progress to standard output
#[derive(Debug, Default)]
pub struct ConsoleProgressAdapter;

impl ConsoleProgressAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressPort for ConsoleProgressAdapter {
    fn no_videos(&self, dir: &Path) {
        println!("No video files found in {}", dir.display());
    }

    fn checking(&self, candidate: &VideoCandidate) {
        println!("Checking: {}", candidate);
    }

    fn transcoded(&self, output: &TranscodeOutput) {
        println!(
            "Transcoded: {} -> {}",
            output.input.display(),
            output.output.display()
        );
    }

    fn failed(&self, candidate: &VideoCandidate, error: &DomainError) {
        println!("Transcode failed: {}, error: {}", candidate, error);
    }
}
