//! tickit - local-first personal to-do list

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = tickit::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
