//! End-to-end tests over the real filesystem: key file, document, sidecar.

use std::fs;
use std::path::PathBuf;

use docseal_sdk::{generate_key, sign, sign_to_sidecar, validate, SdkError, SigningKey};
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    key_path: PathBuf,
    doc_path: PathBuf,
    sidecar: PathBuf,
    key: SigningKey,
}

/// Generate a key, write `doc.txt` with the given contents, sign it.
fn signed_fixture(contents: &[u8]) -> Fixture {
    let dir = TempDir::new().unwrap();
    let key_path = dir.path().join("signing_key.txt");
    let doc_path = dir.path().join("doc.txt");

    let key = generate_key(32, &key_path).unwrap();
    fs::write(&doc_path, contents).unwrap();
    let sidecar = sign_to_sidecar(&doc_path, &key).unwrap();

    Fixture {
        _dir: dir,
        key_path,
        doc_path,
        sidecar,
        key,
    }
}

#[test]
fn hello_world_scenario() {
    // Key of length 32, "hello world" document, sign, verify, tamper,
    // verify again.
    let f = signed_fixture(b"hello world");

    assert_eq!(f.key.len(), 32);
    let stored = fs::read_to_string(&f.sidecar).unwrap();
    assert_eq!(stored.len(), 64);
    assert!(stored.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

    assert!(validate(&f.key_path, &f.doc_path, &f.sidecar).unwrap());

    let mut contents = fs::read(&f.doc_path).unwrap();
    contents.push(b'!');
    fs::write(&f.doc_path, contents).unwrap();
    assert!(!validate(&f.key_path, &f.doc_path, &f.sidecar).unwrap());
}

#[test]
fn signature_survives_reload_from_disk() {
    // Verification uses only the three files, never in-memory state.
    let f = signed_fixture(b"the contract is the file formats");
    let key_bytes = fs::read(&f.key_path).unwrap();
    let reloaded = SigningKey::from_material(String::from_utf8(key_bytes).unwrap());
    assert_eq!(sign(&f.doc_path, &reloaded).unwrap(), sign(&f.doc_path, &f.key).unwrap());
}

#[test]
fn tampered_sidecar_fails_validation() {
    let f = signed_fixture(b"important document");

    let mut sig = fs::read_to_string(&f.sidecar).unwrap().into_bytes();
    // Flip one hex digit, keeping the encoding canonical.
    sig[10] = if sig[10] == b'0' { b'1' } else { b'0' };
    fs::write(&f.sidecar, sig).unwrap();

    assert!(!validate(&f.key_path, &f.doc_path, &f.sidecar).unwrap());
}

#[test]
fn wrong_key_fails_validation() {
    let f = signed_fixture(b"important document");
    let other_key_path = f.key_path.with_file_name("other_key.txt");
    generate_key(32, &other_key_path).unwrap();

    assert!(!validate(&other_key_path, &f.doc_path, &f.sidecar).unwrap());
}

#[test]
fn trailing_newline_in_sidecar_is_a_mismatch_not_an_error() {
    // Byte-for-byte comparison: no trimming of stored signatures.
    let f = signed_fixture(b"data");
    let mut sig = fs::read(&f.sidecar).unwrap();
    sig.push(b'\n');
    fs::write(&f.sidecar, sig).unwrap();

    assert!(!validate(&f.key_path, &f.doc_path, &f.sidecar).unwrap());
}

#[test]
fn garbage_sidecar_is_a_mismatch_not_an_error() {
    let f = signed_fixture(b"data");
    fs::write(&f.sidecar, b"not a signature at all").unwrap();
    assert!(!validate(&f.key_path, &f.doc_path, &f.sidecar).unwrap());
}

#[test]
fn missing_inputs_are_errors_not_false() {
    let f = signed_fixture(b"data");
    let absent = f.doc_path.with_file_name("absent");

    assert!(matches!(
        validate(&absent, &f.doc_path, &f.sidecar),
        Err(SdkError::Store(_))
    ));
    assert!(matches!(
        validate(&f.key_path, &absent, &f.sidecar),
        Err(SdkError::Document { .. })
    ));
    assert!(matches!(
        validate(&f.key_path, &f.doc_path, &absent),
        Err(SdkError::Store(_))
    ));
}

#[test]
fn resigning_overwrites_the_sidecar() {
    let f = signed_fixture(b"version one");
    let first = fs::read_to_string(&f.sidecar).unwrap();

    fs::write(&f.doc_path, b"version two").unwrap();
    sign_to_sidecar(&f.doc_path, &f.key).unwrap();
    let second = fs::read_to_string(&f.sidecar).unwrap();

    assert_ne!(first, second);
    assert!(validate(&f.key_path, &f.doc_path, &f.sidecar).unwrap());
}

#[test]
fn generated_keys_honor_the_length_contract() {
    let dir = TempDir::new().unwrap();
    for n in [8, 32, 4096] {
        let path = dir.path().join(format!("key_{n}.txt"));
        let key = generate_key(n, &path).unwrap();
        assert_eq!(key.len(), n);
        assert_eq!(fs::read(&path).unwrap().len(), n);
    }

    let a = generate_key(32, dir.path().join("a.txt")).unwrap();
    let b = generate_key(32, dir.path().join("b.txt")).unwrap();
    assert_ne!(a.material(), b.material());
}

#[test]
fn large_file_signs_and_validates() {
    // Bigger than the streaming chunk size to exercise multi-chunk reads.
    let payload = vec![0xa7u8; 1 << 20];
    let f = signed_fixture(&payload);
    assert!(validate(&f.key_path, &f.doc_path, &f.sidecar).unwrap());
}
