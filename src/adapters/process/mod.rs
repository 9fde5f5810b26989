//! External process runner shared by the tool adapters
//!
//! Every adapter builds a [`ToolCommand`], awaits it to completion and gets
//! back the captured output. A nonzero exit becomes [`DomainError::ToolFailed`]
//! carrying the tool's standard error.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, trace};

use crate::domain::errors::DomainError;

/// Captured output of a successful tool run
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    pub stdout: String,
}

/// A single invocation of an external tool
#[derive(Debug, Clone)]
pub struct ToolCommand {
    name: String,
    program: PathBuf,
    args: Vec<OsString>,
}

impl ToolCommand {
    /// `name` is used in errors and logs, `program` is what gets executed
    pub fn new(name: impl Into<String>, program: impl AsRef<Path>) -> Self {
        Self {
            name: name.into(),
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_os_string()));
        self
    }

    /// Command line rendered for logging
    pub fn describe(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }

    /// Run the tool to completion, capturing stdout and stderr
    pub async fn run(&self) -> Result<ToolOutput, DomainError> {
        debug!(tool = %self.name, command = %self.describe(), "Running external tool");

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| DomainError::ToolUnavailable {
                tool: self.name.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        trace!(tool = %self.name, %stdout, %stderr, "External tool output");

        if !output.status.success() {
            return Err(DomainError::ToolFailed {
                tool: self.name.clone(),
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        if !stderr.trim().is_empty() {
            debug!(tool = %self.name, "Tool reported: {}", stderr.trim());
        }

        Ok(ToolOutput { stdout })
    }
}
