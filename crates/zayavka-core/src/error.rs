//! Error types for the zayavka-core library.

use thiserror::Error;

/// Main error type for the zayavka library.
#[derive(Error, Debug)]
pub enum ZayavkaError {
    /// Request extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Training store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to request field extraction.
///
/// Individual field extractors never raise: an unparseable value is an
/// absent field, not an error. The only refusal is empty input.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Input text is empty or whitespace-only.
    #[error("input text is empty")]
    EmptyInput,
}

/// Errors related to the training store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying storage could not be read or written.
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A stored example could not be decoded.
    #[error("corrupt training example: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Result type for the zayavka library.
pub type Result<T> = std::result::Result<T, ZayavkaError>;
