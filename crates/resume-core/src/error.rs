//! Error types for the resume generation pipeline

use thiserror::Error;

/// Main error type for all pipeline operations
///
/// Every variant raised while processing a single request is treated as a
/// transient fault by the worker retry loop; classification happens at the
/// call site, not here.
#[derive(Error, Debug)]
pub enum ResumeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Template rendering failed: {0}")]
    Render(String),

    #[error("Document compilation failed: {0}")]
    Compile(String),

    #[error("Work queue closed")]
    QueueClosed,
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, ResumeError>;
