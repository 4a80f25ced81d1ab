//! Credential storage backends.
//!
//! Defines the [`CredentialStore`] trait and provides
//! [`FileCredentialStore`], the file-system-backed implementation that keeps
//! one ciphertext blob and one key-material file per `(category, provider)`
//! entry under the Sequential base directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sequential_core::SecretString;
use tracing::{debug, warn};

use crate::crypto;
use crate::error::{Result, StoreError};
use crate::layout::Layout;
use crate::types::{Category, LoadOutcome, Provider};

/// Async trait for credential storage backends.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Idempotently create the full directory tree (both categories, both
    /// areas). Safe to call repeatedly.
    async fn ensure_layout(&self) -> Result<()>;

    /// Encrypt and store a credential, overwriting any prior value for the
    /// same entry. The plaintext is trimmed first; a value that trims to
    /// empty is rejected with [`StoreError::EmptySecret`].
    async fn save(&self, category: Category, provider: &Provider, plaintext: &str) -> Result<()>;

    /// Load a credential as a typed outcome. Absence and undecryptability
    /// are outcomes, never errors.
    async fn load_entry(&self, category: Category, provider: &Provider) -> LoadOutcome;

    /// Load a credential as the caller-facing plaintext string: the secret
    /// when present and readable, `""` otherwise.
    async fn load(&self, category: Category, provider: &Provider) -> String {
        self.load_entry(category, provider).await.into_plaintext()
    }

    /// Whether a ciphertext blob exists for the entry.
    async fn exists(&self, category: Category, provider: &Provider) -> bool;

    /// Providers with a stored credential in the category, sorted.
    async fn list(&self, category: Category) -> Result<Vec<Provider>>;
}

/// A file-system-backed credential store.
///
/// Every operation re-reads the relevant files; nothing is cached across
/// calls. Writers are not serialized against each other -- this is a
/// single-user desktop tool and concurrent saves to the same entry from
/// separate processes may race. Atomic write-then-rename only guarantees a
/// concurrent reader never observes a truncated blob.
pub struct FileCredentialStore {
    layout: Layout,
}

impl FileCredentialStore {
    /// Create a store rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            layout: Layout::new(base_dir),
        }
    }

    /// Create a store rooted at the default base directory
    /// (`~/.sequential`, or `SEQUENTIAL_HOME` when set).
    pub fn from_default_dir() -> Result<Self> {
        let base_dir = sequential_core::paths::base_dir()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(Self::new(base_dir))
    }

    /// The store's path schema.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Read an entry's key material, generating and persisting it first if
    /// the key file does not exist yet.
    ///
    /// An existing key file is returned unchanged. It is never regenerated
    /// implicitly: a fresh key could not decrypt the blob the old one
    /// protects, which would strand the stored credential for good.
    async fn get_or_create_key(&self, key_path: &Path) -> Result<Vec<u8>> {
        if key_path.exists() {
            return Ok(tokio::fs::read(key_path).await?);
        }

        let key = crypto::generate_key();
        write_atomic(key_path, &key).await?;
        debug!(path = %key_path.display(), "generated key material");
        Ok(key)
    }
}

/// Write `data` to `path` atomically: temp file in the same directory, mode
/// 0600 on Unix, then rename over the destination. A concurrent reader sees
/// either the old file or the new one, never a truncated write.
async fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("tmp");
    tokio::fs::write(&temp_path, data).await?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        tokio::fs::set_permissions(&temp_path, perms).await?;
    }

    tokio::fs::rename(&temp_path, path).await?;
    Ok(())
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn ensure_layout(&self) -> Result<()> {
        for dir in self.layout.all_dirs() {
            tokio::fs::create_dir_all(&dir).await?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o700);
            tokio::fs::set_permissions(self.layout.base(), perms.clone()).await?;
            for dir in self.layout.all_dirs() {
                tokio::fs::set_permissions(&dir, perms.clone()).await?;
            }
        }

        Ok(())
    }

    async fn save(&self, category: Category, provider: &Provider, plaintext: &str) -> Result<()> {
        let trimmed = plaintext.trim();
        if trimmed.is_empty() {
            return Err(StoreError::EmptySecret);
        }

        self.ensure_layout().await?;

        let key_path = self.layout.key_path(category, provider);
        let key = self.get_or_create_key(&key_path).await?;

        let blob = crypto::encrypt(&key, trimmed.as_bytes())?;
        let cipher_path = self.layout.cipher_path(category, provider);
        debug!(%category, %provider, path = %cipher_path.display(), "writing credential");
        write_atomic(&cipher_path, &blob).await?;
        Ok(())
    }

    async fn load_entry(&self, category: Category, provider: &Provider) -> LoadOutcome {
        let cipher_path = self.layout.cipher_path(category, provider);
        if !cipher_path.exists() {
            return LoadOutcome::Absent;
        }

        let blob = match tokio::fs::read(&cipher_path).await {
            Ok(blob) => blob,
            Err(e) => {
                warn!(%category, %provider, "credential blob unreadable: {e}");
                return LoadOutcome::Corrupt {
                    reason: format!("blob unreadable: {e}"),
                };
            }
        };

        let key_path = self.layout.key_path(category, provider);
        let key = match tokio::fs::read(&key_path).await {
            Ok(key) => key,
            Err(e) => {
                warn!(%category, %provider, "key material unreadable: {e}");
                return LoadOutcome::Corrupt {
                    reason: format!("key material unreadable: {e}"),
                };
            }
        };

        match crypto::decrypt(&key, &blob) {
            Ok(plaintext) => match String::from_utf8(plaintext) {
                Ok(value) => {
                    debug!(%category, %provider, "credential decrypted");
                    LoadOutcome::Found(SecretString::new(value))
                }
                Err(e) => LoadOutcome::Corrupt {
                    reason: format!("invalid UTF-8: {e}"),
                },
            },
            Err(e) => {
                warn!(%category, %provider, "credential failed to decrypt: {e}");
                LoadOutcome::Corrupt {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn exists(&self, category: Category, provider: &Provider) -> bool {
        self.layout.cipher_path(category, provider).exists()
    }

    async fn list(&self, category: Category) -> Result<Vec<Provider>> {
        let dir = self.layout.encrypted_dir(category);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut providers = Vec::new();
        let mut entries = tokio::fs::read_dir(&dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };

            // Skip files outside the schema instead of failing the listing.
            if let Some(provider) = self.layout.provider_from_cipher_name(category, name) {
                providers.push(provider);
            }
        }

        providers.sort();
        Ok(providers)
    }
}
