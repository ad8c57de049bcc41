//! Error types for protocol operations.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Signing failed (malformed key material).
    #[error("Signature error: {0}")]
    Signature(String),

    /// Malformed signature encoding (invalid hex or wrong length).
    #[error("Invalid signature format: {0}")]
    Format(String),

    /// Signature verification failed.
    #[error("Invalid signature")]
    InvalidSignature,
}

/// Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
