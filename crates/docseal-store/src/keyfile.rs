use std::fs;
use std::io;
use std::path::Path;

use docseal_crypto::SigningKey;

use crate::error::{StoreError, StoreResult};

/// Conventional key file name, placed alongside the running program.
pub const DEFAULT_KEY_FILE: &str = "signing_key.txt";

/// Write `key`'s material to `path`, restricting access to the owner.
///
/// Overwrites any existing file without confirmation. Only the raw material
/// string is persisted; the creation timestamp stays in memory (it is audit
/// metadata, not part of the file format).
pub fn save_key(key: &SigningKey, path: impl AsRef<Path>) -> StoreResult<()> {
    let path = path.as_ref();
    write_owner_only(path, key.as_bytes()).map_err(|source| StoreError::WriteKey {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), length = key.len(), "key file written");
    Ok(())
}

/// Read key material back from `path` as raw bytes, exactly as stored.
pub fn load_key_bytes(path: impl AsRef<Path>) -> StoreResult<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| StoreError::ReadKey {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn write_owner_only(path: &Path, bytes: &[u8]) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(bytes)?;
    // mode() only applies when the file is created; an overwritten file
    // keeps its old bits unless we reset them.
    file.set_permissions(fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn write_owner_only(path: &Path, bytes: &[u8]) -> io::Result<()> {
    fs::write(path, bytes)
}
