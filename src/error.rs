//! Error types for trace loading, geometry validation and report output

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading the trace or writing the report failed
    #[error("cannot access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A trace token that is not an integer
    #[error("malformed token {token:?} at position {position}")]
    MalformedToken { token: String, position: usize },

    /// A process id outside [0, processes)
    #[error("process id {value} at position {position} is out of bounds (valid range is [0, {processes}))")]
    ProcessOutOfRange {
        value: String,
        position: usize,
        processes: usize,
    },

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}
