//! Configuration loading and management.
//!
//! The config file lives at `~/.sequential/sequential.json5` and only covers
//! what the credential store cannot decide on its own: which executable the
//! launch command starts and which provider's token it hands over. A missing
//! file is not an error; defaults apply.

use crate::error::ConfigError;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main Sequential configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Bot launch settings.
    #[serde(default)]
    pub bot: BotConfig,
}

/// Bot launch configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Executable the launch command starts. No default; `launch` requires
    /// either this or an explicit `--target`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<PathBuf>,

    /// Provider whose stored token is handed to the bot.
    #[serde(default = "default_provider")]
    pub provider: String,
}

fn default_provider() -> String {
    "discord".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            target: None,
            provider: default_provider(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// A missing file yields the default configuration.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = paths::config_file()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        json5::from_str(content).map_err(|e| ConfigError::Json5(e.to_string()))
    }

    /// Save configuration to the default path.
    pub fn save_default(&self) -> Result<(), ConfigError> {
        let path = paths::config_file()?;
        self.save(&path)
    }

    /// Save configuration to a file path.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_json5()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write atomically
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Serialize to JSON5 string.
    pub fn to_json5(&self) -> Result<String, ConfigError> {
        // json5 doesn't have a serializer, so we use serde_json with pretty print
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.provider.trim().is_empty() {
            return Err(ConfigError::Validation(
                "bot.provider must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
