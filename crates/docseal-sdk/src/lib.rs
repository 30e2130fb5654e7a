//! High-level docseal API.
//!
//! Three stateless operations make up the whole toolkit; all hand-off
//! between them goes through the filesystem, never shared memory:
//!
//! - [`generate_key`] — fresh random key, persisted owner-only.
//! - [`sign`] / [`sign_to_sidecar`] — keyed digest over a file's bytes,
//!   persisted as a `<file>.sig` sidecar.
//! - [`validate`] — recompute and compare against a stored signature.
//!
//! Verification distinguishes "could not evaluate" (`Err`) from "evaluated
//! false" (`Ok(false)`): a mismatch is a normal outcome, not an error.
//!
//! ```no_run
//! use docseal_sdk as docseal;
//!
//! # fn main() -> Result<(), docseal::SdkError> {
//! let key = docseal::generate_key(32, "signing_key.txt")?;
//! let sidecar = docseal::sign_to_sidecar("doc.txt", &key)?;
//! assert!(docseal::validate("signing_key.txt", "doc.txt", sidecar)?);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod ops;

pub use error::{SdkError, SdkResult};
pub use ops::{generate_key, load_key, sign, sign_to_sidecar, validate};

pub use docseal_crypto::{Signature, SigningKey, DEFAULT_KEY_LENGTH};
pub use docseal_store::{sidecar_path, DEFAULT_KEY_FILE};
