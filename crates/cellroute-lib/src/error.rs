use thiserror::Error;

use crate::graph::VertexId;

/// Convenient result alias for the cellroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the node/edge tables or endpoints are inconsistent.
    #[error("malformed graph: {reason}")]
    MalformedGraph { reason: String },

    /// Raised when the frontier empties before the destination is explored.
    #[error("no path found between {start} and {destination}")]
    NoPathFound {
        start: VertexId,
        destination: VertexId,
    },

    /// Raised when a path cost no longer fits in the cost type.
    #[error("path cost overflows while reaching vertex {vertex}")]
    CostOverflow { vertex: VertexId },

    /// Raised when a cell id falls outside the 10x10 grid.
    #[error("cell id {cell} is outside the grid (expected 0-99)")]
    InvalidCell { cell: i64 },

    /// Raised when a required section marker is absent from the input file.
    #[error("input is missing the '{section}' section")]
    MissingSection { section: &'static str },

    /// Raised when a row of the input file cannot be interpreted.
    #[error("line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedGraph {
            reason: reason.into(),
        }
    }
}
