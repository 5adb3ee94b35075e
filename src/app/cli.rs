use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;

/// Number of random patterns printed by `-r` unless `-n` says otherwise.
pub const DEFAULT_RANDOM_COUNT: usize = 10;

/// Upper bound accepted by `-n`.
pub const MAX_RANDOM_COUNT: u64 = 100_000;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Counts, lists and generates Android unlock patterns on the 3x3 grid.",
    long_about = None,
    disable_help_flag = true
)]
pub struct Cli {
    /// Print the number of patterns of every length.
    #[clap(short = 's', long = "summary")]
    pub summary: bool,

    /// Print random patterns with LENGTH points (4-9).
    #[clap(short = 'r', long = "random", value_name = "LENGTH")]
    pub random: Option<usize>,

    /// How many random patterns `-r` prints (1-100000).
    #[clap(
        short = 'n',
        long = "count",
        value_name = "COUNT",
        default_value_t = DEFAULT_RANDOM_COUNT,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_RANDOM_COUNT)
    )]
    pub count: usize,

    /// Write every pattern to FILE, one number per line.
    #[clap(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only use the points listed in NODES (e.g. 73652) and print their summary.
    #[clap(short = 'g', long = "guess", value_name = "NODES")]
    pub guess: Option<String>,

    /// Never move directly between the two points of EDGE (e.g. 15).
    #[clap(short = 'e', long = "exclude-edge", value_name = "EDGE")]
    pub exclude_edge: Option<String>,

    /// Print how many dot sets a pattern of each valid length can be drawn from.
    #[clap(short = 'c', long = "choices")]
    pub choices: bool,

    /// Suppress warnings on stderr.
    #[clap(short, long)]
    pub quiet: bool,

    /// Write a verbose trace of the run to PATH.
    #[clap(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print this help and exit with a failure status.
    #[clap(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,
}

impl Cli {
    /// Whether any flag that produces output was given.
    pub fn has_action(&self) -> bool {
        self.guess.is_some() || self.has_action_besides_guess()
    }

    /// Whether an output flag other than `-g` was given.
    pub fn has_action_besides_guess(&self) -> bool {
        self.summary || self.random.is_some() || self.output.is_some() || self.choices
    }
}

/// Prints the generated usage text to stderr.
pub fn print_usage() {
    eprintln!("{}", Cli::command().render_help());
}
