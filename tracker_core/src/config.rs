//! Configuration file support for the tracker.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/tracker/config.toml` and
//! supplies the default biometric profile used when a caller omits one.

use crate::{BiometricProfile, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Default user biometrics
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_weight_kg")]
    pub weight_kg: f64,

    #[serde(default = "default_height_cm")]
    pub height_cm: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            weight_kg: default_weight_kg(),
            height_cm: default_height_cm(),
        }
    }
}

impl ProfileConfig {
    pub fn biometrics(&self) -> BiometricProfile {
        BiometricProfile {
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
        }
    }
}

// Default value functions
fn default_weight_kg() -> f64 {
    75.0
}

fn default_height_cm() -> f64 {
    175.0
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".into()))?;
        Ok(base.join("tracker").join("config.toml"))
    }

    /// Check that the profile holds usable biometrics
    pub fn validate(&self) -> Result<()> {
        if !self.profile.weight_kg.is_finite() || self.profile.weight_kg <= 0.0 {
            return Err(Error::Config(format!(
                "profile.weight_kg must be positive, got {}",
                self.profile.weight_kg
            )));
        }
        if !self.profile.height_cm.is_finite() || self.profile.height_cm <= 0.0 {
            return Err(Error::Config(format!(
                "profile.height_cm must be positive, got {}",
                self.profile.height_cm
            )));
        }
        Ok(())
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
