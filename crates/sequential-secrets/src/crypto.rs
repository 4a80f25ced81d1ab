//! AES-256-GCM encryption with HKDF-SHA256 key derivation.
//!
//! Each entry owns a key-material file; the cipher key for a given blob is
//! derived from that material and a fresh random salt, never used directly.
//! Salt and nonce are prepended to the ciphertext so the blob is
//! self-contained: `salt || nonce || ciphertext+tag`, raw bytes throughout.

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use hkdf::Hkdf;
use rand::RngCore;
use sha2::Sha256;

use crate::error::{Result, StoreError};

const NONCE_SIZE: usize = 12;
const SALT_SIZE: usize = 32;

/// Size of an entry's key-material file in bytes.
pub const KEY_SIZE: usize = 32;

/// HKDF info string used to domain-separate derived keys.
const HKDF_INFO: &[u8] = b"sequential-credential-v1";

/// Derive a 256-bit cipher key from `key_material` and `salt` via HKDF-SHA256.
fn derive_key(key_material: &[u8], salt: &[u8]) -> [u8; KEY_SIZE] {
    let hk = Hkdf::<Sha256>::new(Some(salt), key_material);
    let mut okm = [0u8; KEY_SIZE];
    // expand cannot fail when output length <= 255 * hash-length
    hk.expand(HKDF_INFO, &mut okm)
        .expect("HKDF expand should not fail for 32-byte output");
    okm
}

/// Encrypt `plaintext` under a key derived from `key_material`.
///
/// Returns `salt || nonce || ciphertext_with_tag`. Salt and nonce are freshly
/// random on every call, so the same plaintext encrypted twice under the same
/// key material produces different blobs.
pub fn encrypt(key_material: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut salt = [0u8; SALT_SIZE];
    rand::thread_rng().fill_bytes(&mut salt);

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    rand::thread_rng().fill_bytes(&mut nonce_bytes);

    let key = derive_key(key_material, &salt);
    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| StoreError::EncryptionFailed(e.to_string()))?;

    let nonce = Nonce::from_slice(&nonce_bytes);
    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| StoreError::EncryptionFailed(e.to_string()))?;

    let mut blob = Vec::with_capacity(SALT_SIZE + NONCE_SIZE + ciphertext.len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&ciphertext);

    Ok(blob)
}

/// Decrypt a blob previously produced by [`encrypt`].
///
/// Fails on truncation, tampering, or mismatched key material. The GCM tag
/// authenticates the ciphertext, so corruption is reported as an error
/// rather than decrypting to garbage.
pub fn decrypt(key_material: &[u8], blob: &[u8]) -> Result<Vec<u8>> {
    if blob.len() < SALT_SIZE + NONCE_SIZE {
        return Err(StoreError::DecryptionFailed(
            "blob too short".to_string(),
        ));
    }

    let (salt, rest) = blob.split_at(SALT_SIZE);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_SIZE);

    let key = derive_key(key_material, salt);
    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| StoreError::DecryptionFailed(e.to_string()))?;

    let nonce = Nonce::from_slice(nonce_bytes);
    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|e| StoreError::DecryptionFailed(e.to_string()))
}

/// Generate fresh random key material for a new entry.
pub fn generate_key() -> Vec<u8> {
    let mut key = vec![0u8; KEY_SIZE];
    rand::thread_rng().fill_bytes(&mut key);
    key
}
