use clap::Parser;
use std::process::ExitCode;
use unlock_patterns::app::{self, AppError, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match app::run_app(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Usage(message)) => {
            if !message.is_empty() {
                eprintln!("Warning: {}", message);
            }
            app::print_usage();
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
