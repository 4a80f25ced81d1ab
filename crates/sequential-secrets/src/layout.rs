//! On-disk layout of the credential store.
//!
//! ```text
//! <base>/tokens/encrypted/.<provider>.token
//! <base>/tokens/key/.<provider>.key
//! <base>/apis/encrypted/.<provider>.api
//! <base>/apis/key/.<provider>.key
//! ```
//!
//! File names start with a dot and both key and blob files are raw binary.

use crate::types::{Category, Provider};
use std::path::{Path, PathBuf};

const ENCRYPTED_DIR: &str = "encrypted";
const KEY_DIR: &str = "key";
const KEY_EXT: &str = "key";

/// Path schema for a store rooted at a base directory.
#[derive(Debug, Clone)]
pub struct Layout {
    base: PathBuf,
}

impl Layout {
    /// Create a layout rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The base directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Directory holding ciphertext blobs for a category.
    pub fn encrypted_dir(&self, category: Category) -> PathBuf {
        self.base.join(category.dir_name()).join(ENCRYPTED_DIR)
    }

    /// Directory holding key material for a category.
    pub fn key_dir(&self, category: Category) -> PathBuf {
        self.base.join(category.dir_name()).join(KEY_DIR)
    }

    /// Ciphertext blob path for an entry.
    pub fn cipher_path(&self, category: Category, provider: &Provider) -> PathBuf {
        self.encrypted_dir(category)
            .join(format!(".{}.{}", provider.as_str(), category.cipher_ext()))
    }

    /// Key-material path for an entry.
    pub fn key_path(&self, category: Category, provider: &Provider) -> PathBuf {
        self.key_dir(category)
            .join(format!(".{}.{}", provider.as_str(), KEY_EXT))
    }

    /// All directories the store needs, across both categories and areas.
    pub fn all_dirs(&self) -> Vec<PathBuf> {
        [Category::Tokens, Category::Apis]
            .into_iter()
            .flat_map(|c| [self.encrypted_dir(c), self.key_dir(c)])
            .collect()
    }

    /// Extract the provider label from a ciphertext file name, if the file
    /// belongs to this layout's schema for the given category.
    pub fn provider_from_cipher_name(&self, category: Category, name: &str) -> Option<Provider> {
        let stem = name
            .strip_prefix('.')?
            .strip_suffix(&format!(".{}", category.cipher_ext()))?;
        Provider::new(stem).ok()
    }
}
