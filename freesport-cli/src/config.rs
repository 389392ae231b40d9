use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// CLI configuration, persisted as TOML under the platform config directory.
///
/// The stored admin password is the credential-store half of the admin
/// session: written by `login`, removed by `logout` or by any command that
/// gets a 401 back, which is the server's way of saying the password changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Resource API endpoint.
    pub api_url: String,

    /// Hostname the site's player page is served from. Twitch embeds carry
    /// it as their `parent` parameter and refuse to play under any other
    /// host.
    pub parent_host: String,

    /// Site-internal proxy endpoint for Goodgame channels.
    pub goodgame_proxy: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Stored admin password.
    pub admin_password: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: site_api::DEFAULT_API_URL.to_string(),
            parent_host: "localhost".to_string(),
            goodgame_proxy: embed_resolver::DEFAULT_GOODGAME_PROXY.to_string(),
            timeout_secs: 30,
            admin_password: None,
        }
    }
}

impl AppConfig {
    /// Load the config file, falling back to defaults when it does not exist
    /// yet.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let path = Self::resolve_path(path)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn reset(path: Option<&Path>) -> Result<()> {
        Self::default().save(path)
    }

    pub fn show(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = path {
            return Ok(path.to_path_buf());
        }
        let dir = dirs::config_dir().ok_or(AppError::NoConfigDir)?;
        Ok(dir.join("freesport").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.api_url = "https://api.test/resources".to_string();
        config.parent_host = "sport.example".to_string();
        config.timeout_secs = 5;
        config.admin_password = Some("hunter2".to_string());
        config.save(Some(&path)).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.api_url, "https://api.test/resources");
        assert_eq!(loaded.parent_host, "sport.example");
        assert_eq!(loaded.timeout_secs, 5);
        assert_eq!(loaded.admin_password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.api_url, site_api::DEFAULT_API_URL);
        assert!(config.admin_password.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "parent_host = \"sport.example\"\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.parent_host, "sport.example");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn reset_restores_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.admin_password = Some("hunter2".to_string());
        config.save(Some(&path)).unwrap();

        AppConfig::reset(Some(&path)).unwrap();
        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert!(loaded.admin_password.is_none());
    }
}
