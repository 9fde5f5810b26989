//! Set file times from the embedded capture timestamp
//!
//! ```bash
//! set-file-times ~/Pictures/2023
//! ```

use std::process::ExitCode;

use clap::Parser;
use mediafix::cli::{self, commands, SetFileTimesCli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match SetFileTimesCli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return cli::parse_error_exit(err),
    };

    match commands::set_file_times(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => cli::error_exit(&err),
    }
}
