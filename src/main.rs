//! tasktracker - Track tasks by category, due date and priority

use std::process::ExitCode;

use tasktracker::cli::Reported;

fn main() -> ExitCode {
    match tasktracker::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        // Already shown as a notice
        Err(e) if e.is::<Reported>() => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
