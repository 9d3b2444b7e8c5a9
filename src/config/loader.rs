// src/config/loader.rs
//! Configuration file loading with validation
//!
//! Configs are loaded from an explicit path handed in by the caller; the
//! core deliberately has no search paths or environment surface.

use crate::config::{DecompositionConfig, SimulationConfig};
use crate::error::{EegError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Loads and validates configuration files (TOML or JSON by extension)
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a simulation configuration from a file
    pub fn load_simulation<P: AsRef<Path>>(path: P) -> Result<SimulationConfig> {
        let config: SimulationConfig = Self::load_file(path)?;
        config
            .validate()
            .map_err(|errors| EegError::ConfigParse(errors.join("; ")))?;
        Ok(config)
    }

    /// Load a decomposition configuration from a file
    pub fn load_decomposition<P: AsRef<Path>>(path: P) -> Result<DecompositionConfig> {
        let config: DecompositionConfig = Self::load_file(path)?;
        config
            .validate()
            .map_err(|errors| EegError::ConfigParse(errors.join("; ")))?;
        Ok(config)
    }

    /// Export a configuration as pretty-printed TOML
    pub fn export<P: AsRef<Path>, T: Serialize>(path: P, config: &T) -> Result<()> {
        let content =
            toml::to_string_pretty(config).map_err(|e| EegError::ConfigParse(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn load_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| EegError::ConfigParse(format!("{}: {}", path.display(), e))),
            _ => toml::from_str(&content)
                .map_err(|e| EegError::ConfigParse(format!("{}: {}", path.display(), e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_toml_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
sampling_rate_hz = 512.0
duration_secs = 4.0
seed = 99
            "#
        )
        .unwrap();

        let config = ConfigLoader::load_simulation(temp_file.path()).unwrap();
        assert_eq!(config.sampling_rate_hz, 512.0);
        assert_eq!(config.duration_secs, 4.0);
        assert_eq!(config.seed, Some(99));
        // Missing fields fall back to defaults
        assert_eq!(
            config.noise_std_dev,
            crate::config::signal::DEFAULT_NOISE_STD_DEV
        );
    }

    #[test]
    fn test_load_json_config() {
        let mut temp_file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        writeln!(
            temp_file,
            r#"{{"sampling_rate_hz": 128.0, "filter_order": 2}}"#
        )
        .unwrap();

        let config = ConfigLoader::load_decomposition(temp_file.path()).unwrap();
        assert_eq!(config.sampling_rate_hz, 128.0);
        assert_eq!(config.filter_order, 2);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "duration_secs = -3.0").unwrap();

        let result = ConfigLoader::load_simulation(temp_file.path());
        assert!(matches!(result, Err(EegError::ConfigParse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = ConfigLoader::load_simulation("does/not/exist.toml");
        assert!(matches!(result, Err(EegError::Io(_))));
    }

    #[test]
    fn test_config_export_roundtrip() {
        let temp_file = NamedTempFile::new().unwrap();
        let config = SimulationConfig {
            seed: Some(3),
            ..Default::default()
        };

        ConfigLoader::export(temp_file.path(), &config).unwrap();
        let loaded = ConfigLoader::load_simulation(temp_file.path()).unwrap();
        assert_eq!(loaded.seed, Some(3));
        assert_eq!(loaded.sampling_rate_hz, config.sampling_rate_hz);
    }
}
