use thiserror::Error;

/// Error type for reading points and edges from user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A character that does not name a grid point (only `1`..=`9` do).
    #[error("'{0}' is not a grid point, expected a digit from 1 to 9")]
    InvalidPoint(char),

    /// The node list was empty.
    #[error("No grid points given")]
    EmptyPointList,

    /// An edge must be written as exactly two distinct points, e.g. `13`.
    #[error("Invalid edge '{0}', expected two distinct points such as 13")]
    InvalidEdge(String),
}
