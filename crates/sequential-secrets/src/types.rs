//! Core types for the credential store.

use crate::error::{Result, StoreError};
use sequential_core::SecretString;
use std::fmt;
use std::str::FromStr;

/// Maximum allowed length for a provider label after normalization.
const MAX_PROVIDER_LEN: usize = 64;

/// Credential category. Each category gets its own subtree on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Bot tokens (the launch-eligible category).
    Tokens,
    /// API keys.
    Apis,
}

impl Category {
    /// Directory name for this category's subtree.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Tokens => "tokens",
            Category::Apis => "apis",
        }
    }

    /// File extension for ciphertext blobs in this category.
    pub fn cipher_ext(&self) -> &'static str {
        match self {
            Category::Tokens => "token",
            Category::Apis => "api",
        }
    }
}

impl FromStr for Category {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tokens" => Ok(Category::Tokens),
            "apis" => Ok(Category::Apis),
            other => Err(StoreError::InvalidCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A normalized provider label.
///
/// Providers are free-form -- there is no compiled-in list -- but the label
/// becomes part of a file name, so it is trimmed, lowercased, and restricted
/// to ASCII alphanumerics, underscore, and hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Provider(String);

impl Provider {
    /// Normalize and validate a provider label.
    pub fn new(label: &str) -> Result<Self> {
        let normalized = label.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(StoreError::InvalidProvider(
                "label must not be empty".to_string(),
            ));
        }
        if normalized.len() > MAX_PROVIDER_LEN {
            return Err(StoreError::InvalidProvider(format!(
                "label exceeds maximum length of {MAX_PROVIDER_LEN} characters"
            )));
        }
        if !normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(StoreError::InvalidProvider(format!(
                "label contains invalid characters (allowed: alphanumeric, underscore, hyphen): {label}"
            )));
        }
        Ok(Self(normalized))
    }

    /// The normalized label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Provider {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Outcome of loading a credential.
///
/// Absence and undecryptability are ordinary outcomes, not errors. Callers
/// that only want the legacy behavior can flatten either one to an empty
/// string with [`LoadOutcome::into_plaintext`]; callers that care about the
/// difference (diagnostics, tests) match on the variant.
#[derive(Debug)]
pub enum LoadOutcome {
    /// A credential was stored and decrypted successfully.
    Found(SecretString),

    /// No ciphertext file exists for the entry.
    Absent,

    /// A ciphertext file exists but could not be decrypted (corruption,
    /// tampering, missing or mismatched key, truncation).
    Corrupt {
        /// Why decryption failed. Diagnostic only; contains no secret data.
        reason: String,
    },
}

impl LoadOutcome {
    /// Flatten to the caller-facing plaintext: the secret when found,
    /// the empty string otherwise.
    pub fn into_plaintext(self) -> String {
        match self {
            LoadOutcome::Found(secret) => secret.expose_secret().to_string(),
            LoadOutcome::Absent | LoadOutcome::Corrupt { .. } => String::new(),
        }
    }

    /// Whether a credential was found and decrypted.
    pub fn is_found(&self) -> bool {
        matches!(self, LoadOutcome::Found(_))
    }
}
