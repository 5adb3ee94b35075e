use thiserror::Error;

/// Error type for pattern tree queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Random patterns can only be drawn with a length the lock screen accepts.
    #[error(
        "Invalid pattern length {0}, expected a value from {min} to {max}",
        min = crate::grid::MIN_PATTERN_LENGTH,
        max = crate::grid::POINT_COUNT
    )]
    InvalidLength(usize),

    /// The tree holds no pattern that long (only possible for restricted tables).
    #[error("No pattern of length {0} exists in this pattern tree")]
    NoPatternOfLength(usize),
}
