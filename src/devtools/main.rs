//! The `devtools` binary. All terminal concerns live in `cli/`; this file only
//! hands the exit status back to the process.

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run()
}
