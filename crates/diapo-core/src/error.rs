//! Error types for Diaporama Maker.
//!
//! Stale selections and boundary moves are not errors; they surface as
//! `Option::None` or no-op edits. This type is for genuinely invalid input.

use thiserror::Error;

/// Main error type for diaporama operations.
#[derive(Error, Debug)]
pub enum DiapoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Duplicate timeline id: {0}")]
    DuplicateId(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for diaporama operations.
pub type Result<T> = std::result::Result<T, DiapoError>;
