use std::fs::File;
use std::path::{Path, PathBuf};

use docseal_crypto::{digest, Signature, SigningKey};
use docseal_store as store;

use crate::error::{SdkError, SdkResult};

/// Generate a fresh random key of `length` characters and persist it to
/// `path` with owner-only permissions.
///
/// Overwrites an existing key file without confirmation. If the random
/// source fails, the error surfaces before anything touches the filesystem,
/// so no key file is written.
pub fn generate_key(length: usize, path: impl AsRef<Path>) -> SdkResult<SigningKey> {
    let key = SigningKey::generate(length)?;
    store::save_key(&key, &path)?;
    tracing::info!(path = %path.as_ref().display(), length, "signing key generated");
    Ok(key)
}

/// Load a signing key from a key file.
///
/// The file format is the raw material string, so the contents must be
/// valid UTF-8; generated keys always are (URL-safe base64 alphabet).
pub fn load_key(path: impl AsRef<Path>) -> SdkResult<SigningKey> {
    let bytes = store::load_key_bytes(&path)?;
    let material = String::from_utf8(bytes).map_err(|_| {
        SdkError::Crypto(docseal_crypto::CryptoError::InvalidKey(
            "key file is not valid UTF-8".to_string(),
        ))
    })?;
    Ok(SigningKey::from_material(material))
}

/// Compute the keyed digest of `file_path`'s bytes under `key`.
///
/// Streams the file in bounded chunks; memory use does not grow with file
/// size. Fails if the file cannot be opened or read, producing no signature.
pub fn sign(file_path: impl AsRef<Path>, key: &SigningKey) -> SdkResult<Signature> {
    sign_with_key_bytes(file_path.as_ref(), key.as_bytes())
}

/// Sign `file_path` and persist the result to the conventional `<file>.sig`
/// sidecar, returning the sidecar path.
///
/// The digest is fully computed before the sidecar is touched: a read
/// failure aborts with no partial sidecar written. An existing sidecar is
/// silently overwritten.
pub fn sign_to_sidecar(file_path: impl AsRef<Path>, key: &SigningKey) -> SdkResult<PathBuf> {
    let file_path = file_path.as_ref();
    let signature = sign(file_path, key)?;
    let sidecar = store::sidecar_path(file_path);
    store::write_signature(&signature, &sidecar)?;
    tracing::info!(
        file = %file_path.display(),
        sidecar = %sidecar.display(),
        "file signed"
    );
    Ok(sidecar)
}

/// Verify a stored signature: recompute the digest of `file_path` under the
/// key read from `key_path` and compare it with the contents of
/// `signature_path`.
///
/// The key file is used as raw bytes, exactly as stored. Returns `Ok(true)`
/// on a match and `Ok(false)` on a legitimate mismatch — including a sidecar
/// whose contents are not a canonical 64-character hex digest, which can
/// never equal a real signature. Any of the three files being unreadable is
/// an `Err`, keeping "could not evaluate" distinct from "evaluated false".
///
/// The comparison runs in constant time over the decoded digest bytes, so
/// repeated verification attempts leak nothing about where a forgery
/// diverges.
pub fn validate(
    key_path: impl AsRef<Path>,
    file_path: impl AsRef<Path>,
    signature_path: impl AsRef<Path>,
) -> SdkResult<bool> {
    let key_bytes = store::load_key_bytes(&key_path)?;
    let recomputed = sign_with_key_bytes(file_path.as_ref(), &key_bytes)?;
    let stored = store::read_signature(&signature_path)?;

    let stored_sig = match std::str::from_utf8(&stored)
        .ok()
        .and_then(|s| Signature::from_hex(s).ok())
    {
        Some(sig) => sig,
        None => {
            tracing::debug!(
                path = %signature_path.as_ref().display(),
                "stored signature is not a canonical digest encoding"
            );
            return Ok(false);
        }
    };

    Ok(recomputed == stored_sig)
}

fn sign_with_key_bytes(file_path: &Path, key: &[u8]) -> SdkResult<Signature> {
    let file = File::open(file_path).map_err(|source| SdkError::Document {
        path: file_path.to_path_buf(),
        source,
    })?;
    Ok(digest::sign_reader(file, key)?)
}
