//! Error types for the credential store.

use thiserror::Error;

/// Errors that can occur during credential store operations.
///
/// Note that absence of a credential and decrypt failure on load are *not*
/// errors; they are reported through [`crate::types::LoadOutcome`]. The
/// `DecryptionFailed` variant exists for the crypto layer and is absorbed
/// into `LoadOutcome::Corrupt` before it can reach a caller of `load`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Secret must not be empty")]
    EmptySecret,

    #[error("Invalid provider label: {0}")]
    InvalidProvider(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
