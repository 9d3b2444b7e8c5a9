// src/error.rs
//! Unified error types for signal synthesis and band decomposition

use thiserror::Error;

/// Errors raised by the synthesis and filtering core.
///
/// All variants are fatal to the operation that produced them: no partial
/// signals are returned and no retries are attempted.
#[derive(Error, Debug)]
pub enum EegError {
    /// Unrecognized physiological state label
    #[error("Unknown physiological state: {0}")]
    InvalidState(String),

    /// Cutoff frequencies outside (0, Nyquist) or inverted
    #[error("Invalid cutoff frequencies: {0}")]
    InvalidCutoff(String),

    /// Malformed filter specification relative to the sampling rate
    #[error("Invalid filter specification: {0}")]
    InvalidFilterSpec(String),

    /// Numerical divergence during filter design or application
    #[error("Filter instability: {0}")]
    FilterInstability(String),

    /// File-level failure in the persistence layer
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failure in the persistence layer
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed row or missing column in a persisted signal file
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// Configuration file could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    ConfigParse(String),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, EegError>;
