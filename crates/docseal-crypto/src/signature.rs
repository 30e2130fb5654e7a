use std::fmt;

use subtle::ConstantTimeEq;

use crate::error::{CryptoError, CryptoResult};

/// Length of the hex encoding of a 256-bit digest.
pub const SIGNATURE_HEX_LEN: usize = 64;

/// An HMAC-SHA256 keyed digest over one file's bytes under one key.
///
/// The canonical encoding is 64 characters of lowercase hex; that exact
/// string is what gets written to a sidecar file. Equality compares the raw
/// digest bytes in constant time, so verification cannot be used as a timing
/// oracle for guessing signatures byte by byte.
#[derive(Clone)]
pub struct Signature([u8; 32]);

impl Signature {
    /// Wrap a raw 256-bit digest.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse the canonical 64-character lowercase hex encoding.
    ///
    /// Strict on purpose: uppercase hex, wrong length, or stray whitespace
    /// are all rejected, matching the byte-for-byte nature of the sidecar
    /// format (no trimming, no case normalization).
    pub fn from_hex(s: &str) -> CryptoResult<Self> {
        if s.len() != SIGNATURE_HEX_LEN {
            return Err(CryptoError::InvalidHex(format!(
                "expected {SIGNATURE_HEX_LEN} characters, got {}",
                s.len()
            )));
        }
        if s.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(CryptoError::InvalidHex(
                "uppercase hex is not canonical".to_string(),
            ));
        }
        let decoded = hex::decode(s).map_err(|e| CryptoError::InvalidHex(e.to_string()))?;
        let bytes: [u8; 32] = decoded
            .try_into()
            .map_err(|_| CryptoError::InvalidHex("expected 32 bytes".to_string()))?;
        Ok(Self(bytes))
    }

    /// The canonical lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        // Constant-time over the full 32 bytes regardless of where they
        // first differ.
        bool::from(self.0.ct_eq(&other.0))
    }
}

impl Eq for Signature {}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({}...)", &self.to_hex()[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(byte: u8) -> Signature {
        Signature::from_bytes([byte; 32])
    }

    #[test]
    fn hex_roundtrip() {
        let s = sig(0xab);
        let parsed = Signature::from_hex(&s.to_hex()).unwrap();
        assert_eq!(s, parsed);
    }

    #[test]
    fn hex_is_lowercase_and_64_chars() {
        let h = sig(0xCD).to_hex();
        assert_eq!(h.len(), SIGNATURE_HEX_LEN);
        assert_eq!(h, h.to_lowercase());
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(Signature::from_hex("abcd").is_err());
        assert!(Signature::from_hex(&"ab".repeat(33)).is_err());
    }

    #[test]
    fn from_hex_rejects_uppercase() {
        let upper = sig(0xab).to_hex().to_uppercase();
        assert!(Signature::from_hex(&upper).is_err());
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        assert!(Signature::from_hex(&"zz".repeat(32)).is_err());
        // Trailing newline is part of the string, not trimmed away.
        let mut with_newline = sig(1).to_hex();
        with_newline.pop();
        with_newline.push('\n');
        assert!(Signature::from_hex(&with_newline).is_err());
    }

    #[test]
    fn equality_detects_single_byte_difference() {
        let mut bytes = [7u8; 32];
        let a = Signature::from_bytes(bytes);
        bytes[31] ^= 1;
        let b = Signature::from_bytes(bytes);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
