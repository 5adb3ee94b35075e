// error module
mod error;
// blocking table module
mod table;
// dot choices module
mod choices;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the grid module.
//─────────────────────────────────────────────────────────────────────────────
pub use choices::dot_choices;
pub use error::GridError;
pub use table::{parse_edge, parse_points, BlockTable, Blocker};

/// One of the 9 dots on the unlock grid, numbered 1..=9 row by row.
/// The value 0 is reserved for the virtual root of the pattern tree.
pub type Point = u8;

/// Identifier of the virtual root. Never part of a drawn pattern.
pub const ROOT_POINT: Point = 0;

/// Number of dots on the grid, which is also the longest possible pattern.
pub const POINT_COUNT: usize = 9;

/// Shortest pattern the lock screen accepts.
pub const MIN_PATTERN_LENGTH: usize = 4;
