//! Error types for envelope encryption.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur while sealing or opening envelopes.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The OS entropy source could not be read. Never retried.
    #[error("secure randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    #[error("invalid KDF parameters: {0}")]
    InvalidKdfParams(String),

    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Input is shorter than the fixed envelope header.
    #[error("malformed envelope: {actual} bytes, header requires {expected}")]
    MalformedEnvelope { expected: usize, actual: usize },

    /// Wrong password, tampered data or truncated ciphertext. Deliberately
    /// carries no detail.
    #[error("decryption failed")]
    AuthenticationFailure,
}
