use thiserror::Error;

/// Errors produced by cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// A key length of zero (or otherwise unusable) was requested.
    #[error("invalid key length: {requested} (must be at least 1)")]
    InvalidLength { requested: usize },

    /// The system's secure random source failed.
    #[error("random source failure: {0}")]
    Rng(String),

    /// A signature string was not valid 64-character lowercase hex.
    #[error("invalid signature encoding: {0}")]
    InvalidHex(String),

    /// The key material was rejected by the MAC construction.
    #[error("invalid key material: {0}")]
    InvalidKey(String),

    /// I/O error while streaming data through the digest.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;
