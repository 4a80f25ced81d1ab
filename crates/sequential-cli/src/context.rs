//! Application context shared by all command handlers.

use sequential_core::Config;
use sequential_secrets::FileCredentialStore;

/// Everything a command handler needs, constructed once at startup and
/// passed down explicitly -- there are no module-level singletons.
pub struct AppContext {
    /// Loaded configuration (defaults when no config file exists).
    pub config: Config,

    /// The file-backed credential store under the base directory.
    pub store: FileCredentialStore,
}

impl AppContext {
    /// Build the context from the default config path and base directory.
    pub fn init() -> anyhow::Result<Self> {
        let config = Config::load_default()
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

        let store = FileCredentialStore::from_default_dir()
            .map_err(|e| anyhow::anyhow!("Failed to initialize credential store: {e}"))?;

        Ok(Self { config, store })
    }
}
