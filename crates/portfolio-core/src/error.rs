//! Error types for the portfolio core

use thiserror::Error;

/// Main error type for portfolio core operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Section id is not part of the configured section list
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Section id could not be parsed (empty or whitespace)
    #[error("Invalid section id: {0:?}")]
    InvalidSectionId(String),

    /// Gesture pattern is malformed (for example an empty key sequence)
    #[error("Invalid gesture pattern: {0}")]
    InvalidPattern(String),

    /// Browser storage (or its stand-in) rejected a read or write
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Content source could not be reached or returned nothing usable
    #[error("Content unavailable: {0}")]
    ContentUnavailable(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias using PortfolioError
pub type CoreResult<T> = Result<T, PortfolioError>;
