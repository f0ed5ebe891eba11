//! Error types for TourDesk
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using TourError
pub type Result<T> = std::result::Result<T, TourError>;

/// Unified error type for TourDesk operations
#[derive(Debug, Error)]
pub enum TourError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Collection Errors
    // -------------------------------------------------------------------------
    /// Shown to the user verbatim as the add-form alert
    #[error("Tour ID must be unique!")]
    DuplicateTourId(String),

    #[error("Malformed tour ID: {0:?}")]
    MalformedTourId(String),

    #[error("Index {index} out of range for collection of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Tour not found: {0}")]
    TourNotFound(String),

    // -------------------------------------------------------------------------
    // Form Errors
    // -------------------------------------------------------------------------
    #[error("Form is not open")]
    FormClosed,

    #[error("Tour ID is read-only while editing {0}")]
    TourIdLocked(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
