use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::classifier::ModelSize;
use crate::{mlog_debug, Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Force CPU inference even when a CUDA device is available.
    #[serde(default)]
    pub cpu: bool,
    /// Classifier size to load (base or large).
    #[serde(default)]
    pub model_size: ModelSize,
    /// Override the Hugging Face repo the classifier artifact is fetched
    /// from. Any ModernBERT sequence-classification checkpoint works.
    pub model_id: Option<String>,
}

impl Config {
    pub fn mood_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".mood"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::mood_dir()?.join("mood.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        mlog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            mlog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(&path)?)?;
        mlog_debug!(
            "Config loaded: cpu={}, model_size={}, model_id={:?}",
            config.cpu,
            config.model_size,
            config.model_id
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let mood_dir = Self::mood_dir()?;
        mlog_debug!("Config::save mood_dir={}", mood_dir.display());
        if !mood_dir.exists() {
            fs::create_dir_all(&mood_dir)?;
        }
        let path = Self::config_path()?;
        fs::write(&path, toml::to_string_pretty(self)?)?;
        mlog_debug!("Config saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.cpu);
        assert_eq!(config.model_size, ModelSize::Base);
        assert!(config.model_id.is_none());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            cpu: true,
            model_size: ModelSize::Large,
            model_id: Some("example-org/custom-sentiment".to_string()),
        };
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert!(parsed.cpu);
        assert_eq!(parsed.model_size, ModelSize::Large);
        assert_eq!(
            parsed.model_id,
            Some("example-org/custom-sentiment".to_string())
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert!(!parsed.cpu);
        assert_eq!(parsed.model_size, ModelSize::Base);
        assert!(parsed.model_id.is_none());
    }
}
