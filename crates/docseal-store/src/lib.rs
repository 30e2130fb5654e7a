//! Flat-file persistence for docseal.
//!
//! Every entity in docseal is a standalone file; there is no database or
//! index. This crate owns the two file formats:
//!
//! - **Key file** — the raw key material string, written with owner-only
//!   permissions (`0o600` on unix). Default name: [`DEFAULT_KEY_FILE`].
//! - **Signature sidecar** — the 64-character lowercase hex digest, written
//!   verbatim next to the signed file as `<name>.sig` with default
//!   permissions.
//!
//! # Design rules
//!
//! 1. Writes overwrite silently; callers guard against clobber if it matters.
//! 2. Reads return the file's bytes as-is: no trimming, no normalization.
//! 3. All I/O errors are propagated with the offending path, never swallowed.

pub mod error;
pub mod keyfile;
pub mod sidecar;

pub use error::{StoreError, StoreResult};
pub use keyfile::{load_key_bytes, save_key, DEFAULT_KEY_FILE};
pub use sidecar::{read_signature, sidecar_path, write_signature};
