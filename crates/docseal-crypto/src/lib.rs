//! Cryptographic primitives for docseal.
//!
//! Provides random key generation, streaming HMAC-SHA256 keyed digests over
//! file contents, and a [`Signature`] type whose equality is constant-time.
//!
//! All crypto operations wrap established libraries — no custom cryptography.
//!
//! # Security notes
//!
//! Two behaviors are deliberate and worth knowing about:
//!
//! - Signature comparison decodes both hex strings and compares the raw
//!   digest bytes with [`subtle::ConstantTimeEq`], so verification latency
//!   does not leak where a forged signature first diverges.
//! - [`SigningKey::generate`] base64-encodes `length` random bytes and then
//!   truncates the *encoded text* to `length` characters. The output is
//!   exactly `length` printable characters, but carries roughly `3/4 * length`
//!   bytes of entropy (base64 expands one byte to ~1.33 characters). The
//!   string-length contract is what callers depend on, so it is preserved
//!   rather than silently changed; see [`key`] for details.

pub mod digest;
pub mod error;
pub mod key;
pub mod signature;

pub use digest::DigestWriter;
pub use error::{CryptoError, CryptoResult};
pub use key::{SigningKey, DEFAULT_KEY_LENGTH};
pub use signature::Signature;
