//! Turns parsed command-line flags into a validated run plan.
//!
//! Node lists and edges are parsed here. A malformed one is dropped from the
//! plan and reported as a warning, unless `-g` was the only action.

use std::path::PathBuf;

use super::cli::Cli;
use super::error::AppError;
use crate::grid::{parse_edge, parse_points, Point};

/// What a single invocation should do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunPlan {
    pub summary: bool,
    /// Requested random pattern length, validated by the tree when sampling.
    pub random_length: Option<usize>,
    pub random_count: usize,
    pub output: Option<PathBuf>,
    pub guess: Option<Vec<Point>>,
    pub excluded_edge: Option<(Point, Point)>,
    pub choices: bool,
    pub quiet: bool,
    /// Problems found while reading the flags.
    pub warnings: Vec<String>,
}

impl RunPlan {
    /// Builds a plan from `cli`.
    ///
    /// # Errors
    /// `AppError::Usage` when `-h` was given or no flag asks for output, and
    /// `AppError::Grid` when `-g` is the only action and its node list is
    /// malformed.
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        if cli.help {
            return Err(AppError::Usage(String::new()));
        }
        if !cli.has_action() {
            return Err(AppError::Usage(
                "No action requested, give at least one of -s, -r, -o, -g or -c.".to_string(),
            ));
        }

        let mut warnings = Vec::new();

        let guess = match cli.guess.as_deref() {
            None => None,
            Some(text) => match parse_points(text) {
                Ok(points) => Some(points),
                // A lone -g has nothing left to do without its node list.
                Err(e) if !cli.has_action_besides_guess() => return Err(AppError::Grid(e)),
                Err(e) => {
                    warnings.push(format!("Ignoring -g {}: {}", text, e));
                    None
                }
            },
        };

        let excluded_edge = cli
            .exclude_edge
            .as_deref()
            .and_then(|text| match parse_edge(text) {
                Ok(edge) => Some(edge),
                Err(e) => {
                    warnings.push(format!("Ignoring -e {}: {}", text, e));
                    None
                }
            });

        Ok(Self {
            summary: cli.summary,
            random_length: cli.random,
            random_count: cli.count,
            output: cli.output.clone(),
            guess,
            excluded_edge,
            choices: cli.choices,
            quiet: cli.quiet,
            warnings,
        })
    }

    /// The unrestricted tree is needed for the summary, sampling, and for the
    /// pattern dump when no node list narrows it.
    pub fn needs_full_tree(&self) -> bool {
        self.summary
            || self.random_length.is_some()
            || (self.output.is_some() && self.guess.is_none())
    }
}
