//! Error types for the application

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Price sheet error: {0}")]
    PriceSheet(String),

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Document error: {0}")]
    Document(String),

    #[error("Email error: {0}")]
    Email(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
