//! Error types for cryptographic operations.

use thiserror::Error;

/// Errors that can occur during cryptographic operations.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Invalid key length.
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length.
        expected: usize,
        /// Actual key length.
        actual: usize,
    },

    /// Encryption failed.
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// DH envelope decryption failed (undersized envelope, wrong key, or
    /// tampered ciphertext).
    #[error("Decryption failed: invalid envelope or key")]
    Decryption,

    /// GCM envelope authentication failed (tag mismatch).
    #[error("Authentication failed: GCM tag mismatch")]
    Authentication,

    /// Malformed input framing (invalid base64, undersized blob).
    #[error("Invalid format: {0}")]
    Format(String),
}

/// Result type for cryptographic operations.
pub type Result<T> = std::result::Result<T, CryptoError>;
