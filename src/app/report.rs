//! Plain-text rendering of run results.
//!
//! Every function writes to a generic `Write` so the orchestrator can point
//! it at stdout and the tests at a byte buffer.

use std::io::{self, Write};

use crate::grid::{dot_choices, Point, MIN_PATTERN_LENGTH, POINT_COUNT};
use crate::tree::{Pattern, PatternCounts};

/// Writes the per-length breakdown, the total and the valid subtotal.
pub fn write_summary<W: Write + ?Sized>(
    out: &mut W,
    title: &str,
    counts: &PatternCounts,
) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    for (length, count) in counts.iter() {
        writeln!(out, "Number of patterns of length {}: {}", length, count)?;
    }
    writeln!(out, "Number of all available patterns: {}", counts.total())?;
    writeln!(
        out,
        "Number of valid patterns (length >= {}): {}",
        MIN_PATTERN_LENGTH,
        counts.valid()
    )?;
    Ok(())
}

/// Writes randomly drawn patterns, one per line.
pub fn write_random<W: Write + ?Sized>(
    out: &mut W,
    length: usize,
    patterns: &[Pattern],
) -> io::Result<()> {
    writeln!(out, "Random patterns of length {}:", length)?;
    for pattern in patterns {
        writeln!(out, "{}", pattern)?;
    }
    Ok(())
}

/// Writes C(9, k) for every pattern length the lock screen accepts.
pub fn write_choices<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    for k in MIN_PATTERN_LENGTH..=POINT_COUNT {
        writeln!(
            out,
            "If choosing {} dots out of {} the number of different choices is {}",
            k,
            POINT_COUNT,
            dot_choices(k)
        )?;
    }
    Ok(())
}

/// Digits of a node list, e.g. `[7, 3, 6]` -> `736`.
pub fn format_points(points: &[Point]) -> String {
    Pattern::new(points.to_vec()).to_string()
}

/// First line of a pattern dump, naming the tree it came from.
pub fn pattern_file_header(guess: Option<&[Point]>) -> String {
    match guess {
        Some(points) => format!("# patterns restricted to nodes {}", format_points(points)),
        None => "# all patterns".to_string(),
    }
}
