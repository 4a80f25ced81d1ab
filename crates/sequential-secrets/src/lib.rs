//! Encrypted credential store for Sequential.
//!
//! Stores one secret per `(category, provider)` entry as an AES-256-GCM
//! blob, with the entry's key material kept in a sibling file on the same
//! machine. That co-location is a deliberate threat-model trade-off: the
//! store protects credentials at rest against casual reads and accidental
//! leaks, not against a local attacker with filesystem and memory access
//! to the running process.

pub mod crypto;
pub mod error;
pub mod layout;
pub mod store;
pub mod types;

pub use error::{Result, StoreError};
pub use store::{CredentialStore, FileCredentialStore};
pub use types::{Category, LoadOutcome, Provider};
