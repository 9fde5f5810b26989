//! Re-encode videos that carry rotation metadata
//!
//! ```bash
//! fix-rotations ~/Videos/phone
//! fix-rotations --on-error continue --atomic-replace
//! ```

use std::process::ExitCode;

use clap::Parser;
use mediafix::cli::{self, commands, FixRotationsCli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match FixRotationsCli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return cli::parse_error_exit(err),
    };

    match commands::fix_rotations(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => cli::error_exit(&err),
    }
}
