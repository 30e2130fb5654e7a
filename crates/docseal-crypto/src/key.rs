use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::{CryptoError, CryptoResult};

/// Default key length in characters, matching the default key file contract.
pub const DEFAULT_KEY_LENGTH: usize = 32;

/// A symmetric signing key.
///
/// The material is a printable string drawn from the URL-safe base64
/// alphabet. Whoever holds it can both sign and verify; there is no
/// public half.
///
/// `created_at_ms` is audit metadata only: no operation reads it back, and
/// nothing enforces expiry. The key *file* format is the raw material string
/// alone; the timestamp travels only through this in-memory type and its
/// serde form.
#[derive(Clone, Serialize, Deserialize)]
pub struct SigningKey {
    material: String,
    created_at_ms: u64,
}

impl SigningKey {
    /// Generate a fresh random key of exactly `length` characters.
    ///
    /// Draws `length` bytes from the OS CSPRNG, base64url-encodes them, and
    /// truncates the encoded text to `length` characters. Truncating the
    /// *encoding* means the result carries roughly `3/4 * length` bytes of
    /// true entropy, not `length` — a known quirk of the key-length contract
    /// (output string length == requested length) that callers rely on.
    ///
    /// Errors with [`CryptoError::InvalidLength`] for `length == 0` and
    /// [`CryptoError::Rng`] if the random source fails; no partial key is
    /// ever returned.
    pub fn generate(length: usize) -> CryptoResult<Self> {
        if length == 0 {
            return Err(CryptoError::InvalidLength { requested: length });
        }

        let mut bytes = vec![0u8; length];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| CryptoError::Rng(e.to_string()))?;

        // base64 expands 3 bytes to 4 chars, so the encoding of `length`
        // bytes is always at least `length` chars long.
        let mut material = base64::engine::general_purpose::URL_SAFE.encode(&bytes);
        material.truncate(length);

        Ok(Self {
            material,
            created_at_ms: now_ms(),
        })
    }

    /// Wrap existing key material, e.g. bytes read back from a key file.
    pub fn from_material(material: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            created_at_ms: now_ms(),
        }
    }

    /// The raw secret bytes used as the HMAC key.
    pub fn as_bytes(&self) -> &[u8] {
        self.material.as_bytes()
    }

    /// The key material as a string, for writing to a key file.
    pub fn material(&self) -> &str {
        &self.material
    }

    /// Key length in characters.
    pub fn len(&self) -> usize {
        self.material.len()
    }

    /// `true` if the material is empty. HMAC with an empty key is
    /// well-defined but insecure; generation never produces one, but a key
    /// file may contain one.
    pub fn is_empty(&self) -> bool {
        self.material.is_empty()
    }

    /// Creation time in milliseconds since the UNIX epoch (audit metadata).
    pub fn created_at_ms(&self) -> u64 {
        self.created_at_ms
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigningKey(<redacted>, created_at_ms: {})", self.created_at_ms)
    }
}
