use std::io;
use std::path::PathBuf;

/// Errors from flat-file persistence, each carrying the offending path.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The key file could not be written.
    #[error("failed to write key file {path}: {source}")]
    WriteKey {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The key file could not be read.
    #[error("failed to read key file {path}: {source}")]
    ReadKey {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The signature sidecar could not be written.
    #[error("failed to write signature file {path}: {source}")]
    WriteSignature {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The signature sidecar could not be read.
    #[error("failed to read signature file {path}: {source}")]
    ReadSignature {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
