// Macros for use by child modules of app (orchestrator and friends).
// They call into app::logger; when expanded in a sibling module `super` is
// the `app` module.
macro_rules! verbose_println {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::log_verbose_message_args(format_args!($($arg)*));
        }
    };
}

macro_rules! verbose_eprintln {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::log_verbose_error_args(format_args!($($arg)*));
        }
    };
}

// Brings the macros into scope for the sibling modules.
use verbose_eprintln;
use verbose_println;

mod cli;
mod error;
mod file_handler;
mod logger;
mod orchestrator;
mod plan;
mod report;

pub use cli::{print_usage, Cli};
pub use error::AppError;
pub use orchestrator::{run_app, run_with_output};
pub use plan::RunPlan;
