use std::path::{Path, PathBuf};

use keycanvas_types::constants::DEFAULT_SHARE_BASE_URL;
use keycanvas_types::Address;
use keycanvas_visual::AddressCache;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI settings stored in ~/.keycanvas/settings.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// The session's current address, carried between invocations.
    #[serde(default)]
    pub current_address: Option<Address>,
    /// Base URL for share links.
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
    /// Colored terminal output.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            current_address: None,
            share_base_url: default_share_base_url(),
            color: default_color(),
        }
    }
}

impl Settings {
    /// Get the data directory (~/.keycanvas/).
    pub fn data_dir() -> Result<PathBuf, CliError> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("could not determine home directory".to_string()))?;
        Ok(home.join(".keycanvas"))
    }

    /// Get the settings file path.
    pub fn settings_path() -> Result<PathBuf, CliError> {
        Ok(Self::data_dir()?.join("settings.json"))
    }

    /// Load settings from the default location.
    pub fn load() -> Result<Self, CliError> {
        Self::load_from(&Self::settings_path()?)
    }

    /// Load settings from `path`, creating it with defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, CliError> {
        if path.exists() {
            let data = std::fs::read_to_string(path)?;
            serde_json::from_str(&data).map_err(|e| {
                CliError::Config(format!("invalid settings file {}: {}", path.display(), e))
            })
        } else {
            let settings = Self::default();
            settings.save_to(path)?;
            Ok(settings)
        }
    }

    /// Read settings without creating or rewriting the file.
    ///
    /// A missing or unreadable file yields defaults.
    pub fn peek() -> Self {
        match Self::settings_path() {
            Ok(path) => Self::peek_from(&path),
            Err(e) => {
                tracing::warn!(error = %e, "using default settings");
                Self::default()
            }
        }
    }

    pub fn peek_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable settings");
                Self::default()
            }
        }
    }

    /// Save settings to the default location.
    pub fn save(&self) -> Result<(), CliError> {
        self.save_to(&Self::settings_path()?)
    }

    /// Save settings to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), CliError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let data = serde_json::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::io::Write;
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = std::fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(path)?;
            file.write_all(data.as_bytes())?;
        }

        #[cfg(not(unix))]
        {
            std::fs::write(path, data)?;
        }

        tracing::debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Build the session cache from the persisted current address.
    pub fn address_cache(&self) -> AddressCache {
        match &self.current_address {
            Some(address) => AddressCache::with_address(address.clone()),
            None => AddressCache::new(),
        }
    }

    /// Record the cache's address as the current one. Returns true if it changed.
    pub fn store_cache(&mut self, cache: &AddressCache) -> bool {
        let current = cache.current().cloned();
        if current == self.current_address {
            return false;
        }
        self.current_address = current;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            current_address: Some(Address::new("1BoatSLRHtKNngkdXEeobR76b53LETtpyT").unwrap()),
            share_base_url: "http://localhost:8080".to_string(),
            color: false,
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{}").unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_empty_current_address_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"current_address": ""}"#).unwrap();
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_peek_does_not_create_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        assert_eq!(Settings::peek_from(&path), Settings::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_peek_tolerates_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(Settings::peek_from(&path), Settings::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");
    }

    #[test]
    fn test_peek_reads_existing_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"color": false}"#).unwrap();
        assert!(!Settings::peek_from(&path).color);
    }

    #[cfg(unix)]
    #[test]
    fn test_settings_file_permissions() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        Settings::default().save_to(&path).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_cache_roundtrip_through_settings() {
        let mut settings = Settings::default();
        let mut cache = settings.address_cache();
        let address = cache.get().clone();
        assert!(settings.store_cache(&cache));
        assert!(!settings.store_cache(&cache));
        assert_eq!(settings.address_cache().get(), &address);
    }
}
