//! Config persistence and path resolution for `Config`.
//!
//! Covers:
//! - `load` / `save` (YAML file I/O with atomic write at the default path)
//! - `load_from` / `save_to` (the same against an explicit path)
//! - XDG-style path helpers (`config_path`, `config_dir`)

use super::config_struct::Config;
use crate::error::ConfigError;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Load configuration from the default path, creating it if missing.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Load configuration from `path`.
    ///
    /// A missing file is replaced with the default configuration, which is
    /// written back so the user has something to edit.
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Config path: {:?}", path);

        if !path.exists() {
            log::info!("Config file not found, creating default at {:?}", path);
            let config = Self::default();
            if let Err(e) = config.save_to(path) {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            log::info!("Default config created successfully");
            return Ok(config);
        }

        log::info!("Loading existing config from {:?}", path);
        let contents = fs::read_to_string(path)
            .map_err(ConfigError::from)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config = serde_yaml_ng::from_str(&contents)
            .map_err(ConfigError::Parse)
            .with_context(|| format!("parsing {}", path.display()))?;

        log::debug!(
            "Loaded config with {} tabs and {} colour overrides",
            config.tabs.len(),
            config.chat_colours.len()
        );
        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::Serialize)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)
            .map_err(ConfigError::from)
            .with_context(|| format!("writing {}", temp_path.display()))?;
        if let Err(e) = fs::rename(&temp_path, path) {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                log::warn!("Failed to remove {:?}: {}", temp_path, cleanup);
            }
            return Err(ConfigError::from(e))
                .with_context(|| format!("replacing {}", path.display()));
        }

        log::info!("Config saved to {:?}", path);
        Ok(())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("chat-overlay")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("chat-overlay")
            } else {
                PathBuf::from(".")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChatSource, ChatType, InputChannel};
    use crate::Tab;

    #[test]
    fn test_load_missing_creates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_then_load_preserves_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = Config::default();
        config.hide_chat = true;
        config.font_size = 21.5;
        config.chat_colours.insert(ChatType::Shout, 0xff0000ff);
        let mut tab = Tab::new("Linkshells");
        tab.input_channel = Some(InputChannel::Linkshell3);
        tab.chat_codes
            .insert(ChatType::Linkshell3, ChatSource::SELF | ChatSource::OTHER);
        tab.chat_codes.insert(ChatType::Linkshell4, ChatSource::empty());
        config.tabs.push(tab);

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert!(!path.with_extension("yaml.tmp").exists());
    }

    #[test]
    fn test_failed_replace_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        // A non-empty directory in the way makes the rename fail
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "").unwrap();

        let err = Config::default().save_to(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(_))
        ));
        assert!(!path.with_extension("yaml.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "hide_chat: true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.hide_chat);
        assert_eq!(config.font_size, crate::defaults::font_size());
        assert_eq!(config.tabs, crate::defaults::tabs());
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "font_size: [not a float\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Parse(_))
        ));
    }
}
