use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Grid input error: {0}")]
    Grid(#[from] crate::grid::GridError),
    /// The command line asks for nothing, or for help. Usage is printed.
    #[error("{0}")]
    Usage(String),
}
