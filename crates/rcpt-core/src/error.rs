//! Error types for the rcpt-core library.
//!
//! Extraction itself never fails; everything here is a service-level
//! failure around it (talking to the OCR provider, reading inputs).

use thiserror::Error;

/// Main error type for the rcpt library.
#[derive(Error, Debug)]
pub enum RcptError {
    /// OCR provider error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while obtaining a recognition result.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Transport-level failure talking to the provider.
    #[cfg(feature = "vision")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// The provider payload could not be decoded as JSON.
    #[error("failed to decode recognition response: {0}")]
    Decode(String),

    /// The uploaded image is unusable (e.g. empty).
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// The API key environment variable is not set.
    #[error("missing API key: environment variable {0} is not set")]
    MissingApiKey(String),
}

/// Result type for the rcpt library.
pub type Result<T> = std::result::Result<T, RcptError>;
