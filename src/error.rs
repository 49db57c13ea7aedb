//! Error types for the Snaplink utility.

use thiserror::Error;

/// Main error type for Snaplink operations.
#[derive(Error, Debug)]
pub enum SnaplinkError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failures talking to an external endpoint
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The shortener answered with a non-success status
    #[error("Shortener responded with HTTP {0}")]
    ShortenStatus(reqwest::StatusCode),

    /// The shortener answered 2xx but the body held no usable short URL
    #[error("Shortener response did not contain a short URL")]
    MalformedResponse,

    /// The journal endpoint answered with a non-success status
    #[error("Journal endpoint responded with HTTP {0}")]
    JournalStatus(reqwest::StatusCode),

    /// Clipboard access failures
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Line editor failures
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Snaplink operations.
pub type Result<T> = std::result::Result<T, SnaplinkError>;
