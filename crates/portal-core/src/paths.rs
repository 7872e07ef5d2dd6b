//! Path resolution for portal configuration and data directories.
//!
//! PORTAL_HOME resolution order:
//! 1. PORTAL_HOME environment variable (if set)
//! 2. ~/.config/portal (default)

use std::path::PathBuf;

/// Returns the portal home directory.
///
/// Checks PORTAL_HOME env var first, falls back to ~/.config/portal
pub fn portal_home() -> PathBuf {
    if let Ok(home) = std::env::var("PORTAL_HOME") {
        return PathBuf::from(home);
    }

    dirs::home_dir()
        .map(|h| h.join(".config").join("portal"))
        .expect("Could not determine home directory")
}

/// Returns the path to the config.toml file.
pub fn config_path() -> PathBuf {
    portal_home().join("config.toml")
}

/// Returns the directory holding the durable storage slots.
pub fn data_dir() -> PathBuf {
    portal_home().join("storage")
}
