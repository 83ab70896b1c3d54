use clap::Parser;
use std::process::ExitCode;
use unixize_cli::args::Args;
use unixize_cli::{logging, presentation};

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init_logging() {
        eprintln!("{e}");
    }

    match unixize_cli::run(args) {
        Ok(summary) => {
            presentation::print_errors(&summary.errors);
            if summary.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
