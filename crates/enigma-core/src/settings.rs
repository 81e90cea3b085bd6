//! Persistent user settings for Enigma
//!
//! Settings are stored in a TOML configuration file at:
//! - Linux/macOS: `~/.config/enigma/enigma_config.toml`
//! - Windows: `%APPDATA%\enigma\enigma_config.toml`
//!
//! They hold the default machine key used when the command line does not
//! give one, plus a few behavior switches. Machine *state* is never stored.
//!
//! # Example Configuration
//!
//! ```toml
//! [machine]
//! rotors = ["I", "II", "III"]
//! positions = "AAA"
//! rings = [1, 1, 1]
//! reflector = "B"
//! plugboard = "AT BS CM"
//!
//! [behavior]
//! quiet = false
//! strict_plugboard = false
//! group_size = 5
//! ```

use crate::codec;
use crate::config::{MachineConfig, DEFAULT_RINGS};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration file name
const CONFIG_FILE_NAME: &str = "enigma_config.toml";

/// Application name for config directory
const APP_NAME: &str = "enigma";

/// User settings loaded from configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Default machine key
    pub machine: MachineSettings,

    /// Behavior settings
    pub behavior: BehaviorSettings,
}

/// Default machine key, stored as the operator would type it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MachineSettings {
    /// Rotor names left to right (e.g., "I", "II", "III")
    pub rotors: Vec<String>,

    /// Starting window letters left to right (e.g., "AAA")
    pub positions: String,

    /// Ring settings left to right, 1..=26
    pub rings: Vec<u8>,

    /// Reflector name
    pub reflector: String,

    /// Plugboard pairs as free text (e.g., "AT BS CM")
    pub plugboard: String,
}

/// General behavior settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BehaviorSettings {
    /// Whether to suppress non-error output
    pub quiet: bool,

    /// Reject conflicting plugboard pairs instead of dropping them
    pub strict_plugboard: bool,

    /// Split letter output into groups of this size (0 disables grouping)
    pub group_size: usize,
}

impl Default for MachineSettings {
    fn default() -> Self {
        let config = MachineConfig::default();
        Self {
            rotors: config.rotors.iter().map(|r| r.name().to_string()).collect(),
            positions: config.window(),
            rings: DEFAULT_RINGS.to_vec(),
            reflector: config.reflector.name().to_string(),
            plugboard: String::new(),
        }
    }
}

impl MachineSettings {
    /// Convert to a validated machine configuration
    ///
    /// Plugboard pairs reusing a letter are dropped.
    pub fn to_config(&self) -> Result<MachineConfig> {
        self.build_config(false)
    }

    /// Convert to a validated machine configuration, rejecting plugboard pairs
    /// that reuse a letter
    pub fn to_strict_config(&self) -> Result<MachineConfig> {
        self.build_config(true)
    }

    fn build_config(&self, strict_plugboard: bool) -> Result<MachineConfig> {
        let rotors = match &self.rotors[..] {
            [l, m, r] => [l.parse()?, m.parse()?, r.parse()?],
            _ => {
                return Err(Error::InvalidConfig(format!(
                    "expected 3 rotors, got {}",
                    self.rotors.len()
                )))
            }
        };

        let positions: Vec<char> = self.positions.trim().chars().collect();
        let positions = match positions[..] {
            [l, m, r] => [l, m, r],
            _ => {
                return Err(Error::InvalidConfig(format!(
                    "expected 3 positions, got {:?}",
                    self.positions
                )))
            }
        };

        let rings = match self.rings[..] {
            [l, m, r] => [l, m, r],
            _ => {
                return Err(Error::InvalidConfig(format!(
                    "expected 3 ring settings, got {}",
                    self.rings.len()
                )))
            }
        };

        let plugboard = if strict_plugboard {
            codec::parse_plugboard_text_strict(&self.plugboard)?
        } else {
            codec::parse_plugboard_text(&self.plugboard)
        };

        let config = MachineConfig::new()
            .rotors(rotors)
            .positions(positions)
            .rings(rings)
            .reflector(self.reflector.parse()?)
            .plugboard(plugboard);
        config.validate()?;
        Ok(config)
    }
}

impl Settings {
    /// Load settings from a configuration file
    ///
    /// Returns default settings if there is no path, or the file doesn't exist
    /// or can't be parsed
    pub fn load_from_path(path: Option<PathBuf>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config path available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(settings) => {
                    tracing::debug!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save settings to a specific path
    pub fn save_to_path(&self, path: Option<PathBuf>) -> std::result::Result<PathBuf, SettingsError> {
        let path = path.ok_or(SettingsError::NoConfigDir)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let contents = toml::to_string_pretty(self).map_err(SettingsError::Serialize)?;

        std::fs::write(&path, contents).map_err(|e| SettingsError::Io {
            path: path.clone(),
            source: e,
        })?;

        tracing::info!("Saved settings to {:?}", path);
        Ok(path)
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Option<PathBuf> {
        dirs_next::config_dir().map(|p| p.join(APP_NAME).join(CONFIG_FILE_NAME))
    }
}

/// Errors that can occur when working with settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// No configuration directory available
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// Failed to read or write config file
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path that caused the error
        path: PathBuf,
        /// The underlying error
        source: std::io::Error,
    },

    /// Failed to serialize settings
    #[error("Failed to serialize settings: {0}")]
    Serialize(toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RotorId;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.machine.rotors, vec!["I", "II", "III"]);
        assert_eq!(settings.machine.positions, "AAA");
        assert_eq!(settings.machine.rings, vec![1, 1, 1]);
        assert_eq!(settings.machine.reflector, "B");
        assert!(settings.machine.plugboard.is_empty());
        assert!(!settings.behavior.quiet);
        assert!(!settings.behavior.strict_plugboard);
        assert_eq!(settings.behavior.group_size, 0);
    }

    #[test]
    fn test_default_machine_settings_match_default_config() {
        let config = MachineSettings::default().to_config().unwrap();
        assert_eq!(config, MachineConfig::default());
    }

    #[test]
    fn test_settings_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("enigma_config.toml");

        let settings = Settings {
            machine: MachineSettings {
                rotors: vec!["IV".to_string(), "V".to_string(), "I".to_string()],
                positions: "QEV".to_string(),
                rings: vec![5, 12, 20],
                reflector: "B".to_string(),
                plugboard: "AT BS CM".to_string(),
            },
            behavior: BehaviorSettings {
                quiet: true,
                strict_plugboard: true,
                group_size: 5,
            },
        };

        settings.save_to_path(Some(config_path.clone())).unwrap();
        assert!(config_path.exists());

        let loaded = Settings::load_from_path(Some(config_path));
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_to_config() {
        let machine = MachineSettings {
            rotors: vec!["iv".to_string(), "V".to_string(), "I".to_string()],
            positions: "qev".to_string(),
            rings: vec![5, 12, 20],
            reflector: "B".to_string(),
            plugboard: "AT BS CM".to_string(),
        };
        let config = machine.to_config().unwrap();
        assert_eq!(config.rotors, [RotorId::IV, RotorId::V, RotorId::I]);
        assert_eq!(config.window(), "QEV");
        assert_eq!(config.plugboard, vec![('A', 'T'), ('B', 'S'), ('C', 'M')]);
    }

    #[test]
    fn test_to_config_errors() {
        let mut machine = MachineSettings::default();
        machine.rotors.pop();
        assert!(matches!(machine.to_config(), Err(Error::InvalidConfig(_))));

        let mut machine = MachineSettings::default();
        machine.rotors[1] = "IX".to_string();
        assert!(matches!(machine.to_config(), Err(Error::InvalidRotor(_))));

        let mut machine = MachineSettings::default();
        machine.rings = vec![1, 40, 1];
        assert!(matches!(machine.to_config(), Err(Error::InvalidRingSetting(40))));

        let mut machine = MachineSettings::default();
        machine.positions = "AB".to_string();
        assert!(matches!(machine.to_config(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_strict_config_rejects_reused_letter() {
        let machine = MachineSettings {
            plugboard: "AB AC".to_string(),
            ..Default::default()
        };
        assert_eq!(machine.to_config().unwrap().plugboard, vec![('A', 'B')]);
        assert!(matches!(
            machine.to_strict_config(),
            Err(Error::ConflictingPlugboardPair { letter: 'A', .. })
        ));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let settings =
            Settings::load_from_path(Some(PathBuf::from("/nonexistent/enigma_config.toml")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_no_path() {
        assert_eq!(Settings::load_from_path(None), Settings::default());
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("enigma_config.toml");

        let partial_config = r#"
[machine]
positions = "XYZ"
"#;
        std::fs::write(&config_path, partial_config).unwrap();

        let settings = Settings::load_from_path(Some(config_path));
        assert_eq!(settings.machine.positions, "XYZ");
        assert_eq!(settings.machine.rotors, vec!["I", "II", "III"]);
        assert_eq!(settings.behavior, BehaviorSettings::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("enigma_config.toml");
        std::fs::write(&config_path, "this is not valid toml {{{{").unwrap();

        let settings = Settings::load_from_path(Some(config_path));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_default_file_layout() {
        let config_str = toml::to_string_pretty(&Settings::default()).unwrap();
        assert!(config_str.contains("[machine]"));
        assert!(config_str.contains("[behavior]"));
        assert!(config_str.contains("rotors"));
        assert!(config_str.contains("strict_plugboard"));
    }

    #[test]
    fn test_save_to_none_path() {
        let result = Settings::default().save_to_path(None);
        assert!(matches!(result, Err(SettingsError::NoConfigDir)));
    }

    #[test]
    fn test_config_path() {
        if let Some(p) = Settings::config_path() {
            assert!(p.to_string_lossy().contains("enigma"));
            assert!(p.to_string_lossy().ends_with("enigma_config.toml"));
        }
    }

    #[test]
    fn test_settings_error_display() {
        let err = SettingsError::NoConfigDir;
        assert!(err.to_string().contains("configuration directory"));

        let io_err = SettingsError::Io {
            path: PathBuf::from("/test/path"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(io_err.to_string().contains("/test/path"));
    }
}
