//! Context CLI - Markdown context notes grouped by project

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = context_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
