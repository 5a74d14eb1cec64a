//! Error types for the face orientation tracking library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Zero or negative image/display dimensions
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Replay sample file could not be read or parsed
    #[error("Replay error: {0}")]
    Replay(String),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
