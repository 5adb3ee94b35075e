//! Enumerates every Android unlock pattern on the 3x3 grid.
//!
//! * [`grid`]: the points, their blocking rules and input parsing.
//! * [`tree`]: the pattern tree built from a blocking table and the walks over it.
//! * [`app`]: the command-line front end.

pub mod app;
pub mod grid;
pub mod tree;
