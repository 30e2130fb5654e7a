use std::io::Read;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{CryptoError, CryptoResult};
use crate::signature::Signature;

type HmacSha256 = Hmac<Sha256>;

/// Chunk size for streaming reads. Keeps memory O(1) in file size.
const CHUNK_SIZE: usize = 8 * 1024;

/// Incremental HMAC-SHA256 digest keyed by raw secret bytes.
///
/// Takes `&[u8]` rather than [`SigningKey`](crate::SigningKey) because the
/// verifier keys the digest straight from a key file's bytes, with no
/// re-parsing. Feed bytes with [`update`](Self::update) (or stream a whole
/// reader with [`consume`](Self::consume)), then [`finalize`](Self::finalize)
/// into a [`Signature`]. The mapping from (key bytes, input bytes) to
/// signature is deterministic.
pub struct DigestWriter {
    mac: HmacSha256,
}

impl DigestWriter {
    /// Start a digest keyed by `key`.
    ///
    /// An empty key is accepted: HMAC is well-defined for it, though it
    /// offers no secrecy.
    pub fn new(key: &[u8]) -> CryptoResult<Self> {
        let mac = HmacSha256::new_from_slice(key)
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
        Ok(Self { mac })
    }

    /// Feed a chunk of input bytes.
    pub fn update(&mut self, data: &[u8]) {
        self.mac.update(data);
    }

    /// Stream everything from `reader` through the digest in bounded chunks.
    pub fn consume<R: Read>(mut self, mut reader: R) -> CryptoResult<Signature> {
        let mut buf = [0u8; CHUNK_SIZE];
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            self.mac.update(&buf[..n]);
        }
        Ok(self.finalize())
    }

    /// Finish and produce the signature.
    pub fn finalize(self) -> Signature {
        let digest = self.mac.finalize().into_bytes();
        Signature::from_bytes(digest.into())
    }
}

/// Digest an entire reader under `key` in one call.
pub fn sign_reader<R: Read>(reader: R, key: &[u8]) -> CryptoResult<Signature> {
    DigestWriter::new(key)?.consume(reader)
}
