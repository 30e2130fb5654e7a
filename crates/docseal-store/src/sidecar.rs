use std::fs;
use std::path::{Path, PathBuf};

use docseal_crypto::Signature;

use crate::error::{StoreError, StoreResult};

/// Suffix appended to a signed file's path to name its sidecar.
pub const SIDECAR_SUFFIX: &str = ".sig";

/// The conventional sidecar path for `file`: the same path with `.sig`
/// appended (so `doc.txt` pairs with `doc.txt.sig`).
pub fn sidecar_path(file: impl AsRef<Path>) -> PathBuf {
    let mut os = file.as_ref().as_os_str().to_os_string();
    os.push(SIDECAR_SUFFIX);
    PathBuf::from(os)
}

/// Write `signature`'s hex encoding verbatim to `path`.
///
/// Uses default permissions (a signature is not a secret) and silently
/// overwrites an existing sidecar.
pub fn write_signature(signature: &Signature, path: impl AsRef<Path>) -> StoreResult<()> {
    let path = path.as_ref();
    fs::write(path, signature.to_hex()).map_err(|source| StoreError::WriteSignature {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "signature sidecar written");
    Ok(())
}

/// Read a stored signature's bytes, exactly as persisted.
///
/// No trimming, no decoding, no parsing: whether the bytes are a valid
/// signature encoding is the verifier's question, and byte-for-byte fidelity
/// is what makes a tampered sidecar detectable.
pub fn read_signature(path: impl AsRef<Path>) -> StoreResult<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| StoreError::ReadSignature {
        path: path.to_path_buf(),
        source,
    })
}
