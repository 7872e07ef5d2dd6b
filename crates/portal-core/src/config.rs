//! Configuration management for the portal.
//!
//! Loads configuration from ${PORTAL_HOME}/config.toml with sensible
//! defaults. A missing or malformed file degrades to the defaults; the
//! portal must come up in environments that have no config at all.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::paths;

/// Storage namespace used when none is configured.
///
/// The namespace prefixes both durable slot keys, so changing it orphans
/// previously persisted accounts and sessions.
pub const DEFAULT_NAMESPACE: &str = "deejoft-portal";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix for the durable storage keys.
    pub namespace: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl Config {
    /// Loads the config from the default path.
    pub fn load() -> Self {
        Self::load_from(&paths::config_path())
    }

    /// Loads the config from a specific path.
    ///
    /// Missing files yield the defaults. Malformed files are logged and
    /// also yield the defaults, so a bad edit never blocks startup.
    pub fn load_from(path: &Path) -> Self {
        let Ok(raw) = fs::read_to_string(path) else {
            return Self::default();
        };

        toml::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!("Ignoring malformed config at {}: {err}", path.display());
            Self::default()
        })
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = toml::to_string(&Self::default())
            .context("Failed to serialize default config to TOML")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }

    /// Durable slot key for the registered-user list.
    pub fn users_key(&self) -> String {
        format!("{}-users", self.namespace)
    }

    /// Durable slot key for the active session.
    pub fn active_user_key(&self) -> String {
        format!("{}-active-user", self.namespace)
    }
}
