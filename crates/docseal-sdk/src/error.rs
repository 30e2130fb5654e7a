use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from the high-level operations.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The document to sign or verify could not be opened or read.
    #[error("failed to read document {path}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A cryptographic operation failed.
    #[error(transparent)]
    Crypto(#[from] docseal_crypto::CryptoError),

    /// A key file or sidecar could not be read or written.
    #[error(transparent)]
    Store(#[from] docseal_store::StoreError),
}

/// Result alias for high-level operations.
pub type SdkResult<T> = Result<T, SdkError>;
