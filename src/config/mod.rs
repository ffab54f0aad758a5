pub mod bridge;
pub mod world;

pub use bridge::BridgeConfig;
pub use world::WorldConfig;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

/// Everything the binary needs to stand a session up, loadable from a
/// TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub bridge: BridgeConfig,
}

impl BuildConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.world.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// The per-user config file location, when the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "bricklet", "bricklet")
            .map(|dirs| dirs.config_dir().join("bricklet.toml"))
    }

    /// Loads the per-user config, falling back to defaults when the
    /// file does not exist yet.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bricklet.toml");

        let mut config = BuildConfig::default();
        config.world.world_size = 16;
        config.bridge.enabled = true;

        config.save(&path).unwrap();
        let loaded = BuildConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bricklet.toml");
        fs::write(&path, "[world]\nworld_size = 12\n").unwrap();

        let loaded = BuildConfig::load(&path).unwrap();
        assert_eq!(loaded.world.world_size, 12);
        assert_eq!(loaded.world.stud_spacing, 0.5);
        assert_eq!(loaded.bridge, BridgeConfig::default());
    }

    #[test]
    fn test_invalid_world_size_is_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bricklet.toml");
        fs::write(&path, "[world]\nworld_size = 99\n").unwrap();

        assert!(matches!(
            BuildConfig::load(&path),
            Err(ConfigError::InvalidValue { field: "world_size", .. })
        ));
    }

    #[test]
    fn test_garbage_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bricklet.toml");
        fs::write(&path, "not toml {{{{").unwrap();

        assert!(matches!(
            BuildConfig::load(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
