//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Options shared by both tools
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Configuration file (default: ./mediafix.toml when present)
    #[arg(long, env = "MEDIAFIX_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Logging level or filter directive (RUST_LOG takes precedence)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Log output format: pretty, compact or json
    #[arg(long, default_value = "pretty", value_name = "FORMAT")]
    pub log_format: String,
}

impl Default for CommonArgs {
    fn default() -> Self {
        Self {
            config: None,
            log_level: None,
            log_format: "pretty".to_string(),
        }
    }
}

/// Arguments for rotation fixing
#[derive(Args, Debug, Clone, Default)]
pub struct FixArgs {
    /// Constant Rate Factor for the re-encode (0-51)
    #[arg(long)]
    pub crf: Option<u8>,

    /// Encoding preset
    #[arg(long)]
    pub preset: Option<String>,

    /// Token inserted before the extension of the temporary output
    #[arg(long)]
    pub suffix: Option<String>,

    /// What to do after a failed re-encode: abort or continue
    #[arg(long, value_name = "POLICY")]
    pub on_error: Option<String>,

    /// Rename the output over the original in one step
    #[arg(long)]
    pub atomic_replace: bool,
}
