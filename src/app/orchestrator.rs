//! Main application orchestrator.
//!
//! Coordinates one run:
//! 1. Initializes the verbose log if `--log-file` was given.
//! 2. Turns the flags into a `RunPlan`, reporting malformed node lists or edges.
//! 3. Derives the blocking table (edge exclusion applied).
//! 4. Builds the unrestricted tree when the plan needs it and prints the
//!    summary and random patterns.
//! 5. Builds the restricted tree for `-g` and prints its summary.
//! 6. Dumps the relevant tree to the `-o` file.
//!
//! Warnings never abort the run: an invalid random length skips sampling and
//! an unwritable output file skips the dump.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::plan::RunPlan;
use super::report;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::grid::BlockTable;
use crate::tree::PatternTree;
use std::io::{self, Write};

/// Prints a warning on stderr (unless quiet) and records it in the log.
fn warn(quiet_mode: bool, message: &str) {
    if !quiet_mode {
        eprintln!("Warning: {}", message);
    }
    verbose_eprintln!(quiet_mode, "{}", message);
}

/// Builds a tree and logs its size.
fn build_tree(table: &BlockTable, label: &str, quiet_mode: bool) -> PatternTree {
    verbose_println!(quiet_mode, "[STEP] Building {} pattern tree...", label);
    let tree = PatternTree::build(table);
    verbose_println!(
        quiet_mode,
        "   => {} nodes, longest pattern has {} points.",
        tree.node_count(),
        tree.max_length()
    );
    tree
}

/// Runs the application for the parsed command line.
///
/// # Errors
/// `AppError::Usage` when usage should be printed instead (no action, `-h`),
/// and `AppError::Io` when writing to stdout fails.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    // Initialize the global logger if asked to and not in quiet mode.
    if let Some(log_path) = cli.log_file.as_ref().filter(|_| !quiet_mode) {
        if let Err(e) = logger::init_global_logger(log_path) {
            // The run continues, only the log file is unavailable.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                log_path.display(),
                e
            );
        } else {
            verbose_println!(quiet_mode, "Verbose logging initialized to {}", log_path.display());
        }
    }

    let result = run_plan(&cli);

    if let Err(e) = logger::flush_global_logger() {
        eprintln!("[WARNING] Failed to perform final flush of the log file: {}", e);
    }
    result
}

fn run_plan(cli: &Cli) -> Result<(), AppError> {
    let plan = RunPlan::from_cli(cli)?;
    let quiet_mode = plan.quiet;
    for warning in &plan.warnings {
        warn(quiet_mode, warning);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(&plan, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Executes `plan`, writing every report to `out`.
pub fn run_with_output<W: Write + ?Sized>(plan: &RunPlan, out: &mut W) -> Result<(), AppError> {
    let quiet_mode = plan.quiet;

    let mut table = BlockTable::standard();
    if let Some((a, b)) = plan.excluded_edge {
        verbose_println!(quiet_mode, "Excluding edge {}-{} in both directions.", a, b);
        table = table.without_edge(a, b);
    }

    let full_tree = plan
        .needs_full_tree()
        .then(|| build_tree(&table, "unrestricted", quiet_mode));

    if let Some(tree) = &full_tree {
        if plan.summary {
            report::write_summary(out, "All patterns", &tree.count_by_length())?;
        }

        if let Some(length) = plan.random_length {
            let mut rng = rand::thread_rng();
            match tree.sample_random(length, plan.random_count, &mut rng) {
                Ok(patterns) => report::write_random(out, length, &patterns)?,
                Err(e) => warn(quiet_mode, &format!("Skipping random patterns: {}", e)),
            }
        }
    }

    if plan.choices {
        report::write_choices(out)?;
    }

    let guess_tree = plan.guess.as_deref().map(|points| {
        let tree = build_tree(&table.restricted(points), "restricted", quiet_mode);
        (points, tree)
    });

    if let Some((points, tree)) = &guess_tree {
        let title = format!("Patterns using nodes {}", report::format_points(points));
        report::write_summary(out, &title, &tree.count_by_length())?;
    }

    if let Some(path) = &plan.output {
        let dump = match &guess_tree {
            Some((points, tree)) => Some((report::pattern_file_header(Some(*points)), tree)),
            None => full_tree
                .as_ref()
                .map(|tree| (report::pattern_file_header(None), tree)),
        };
        if let Some((header, tree)) = dump {
            match file_handler::write_patterns_to_file(path, &header, tree) {
                Ok(written) => verbose_println!(
                    quiet_mode,
                    "[INFO] {} patterns written to {}",
                    written,
                    path.display()
                ),
                Err(e) => warn(
                    quiet_mode,
                    &format!("Failed to write patterns to {}: {}", path.display(), e),
                ),
            }
        }
    }

    Ok(())
}
