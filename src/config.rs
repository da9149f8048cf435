//! Engine tuning configuration with JSON load/save helpers.
//!
//! All animation constants live here so a deployment can retune blink
//! cadence or the battery threshold without a rebuild. A missing or
//! unparsable file degrades to the documented defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Errors from persisting a [`FaceConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Tunable animation constants. Defaults are the reference values the
/// face was designed around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceConfig {
    /// Emotion transition duration in milliseconds.
    pub transition_ms: u64,
    /// Lower bound of the uniformly drawn pause between blinks, seconds.
    pub blink_min_interval_secs: f32,
    /// Upper bound of the uniformly drawn pause between blinks, seconds.
    pub blink_max_interval_secs: f32,
    /// Duration of one full blink, seconds.
    pub blink_duration_secs: f32,
    /// Breathing sinusoid amplitude, pixels of vertical offset.
    pub breathe_amplitude: f32,
    /// Breathing sinusoid frequency, radians per second.
    pub breathe_frequency: f32,
    /// Eye sparkle sinusoid frequency, radians per second.
    pub sparkle_frequency: f32,
    /// Battery voltage below which the safety face is forced.
    pub low_voltage_threshold: f32,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            transition_ms: 550,
            blink_min_interval_secs: 2.0,
            blink_max_interval_secs: 5.0,
            blink_duration_secs: 0.18,
            breathe_amplitude: 6.0,
            breathe_frequency: 0.7,
            sparkle_frequency: 3.0,
            low_voltage_threshold: 10.0,
        }
    }
}

/// Load a config file, falling back to defaults when the file is
/// missing or unparsable.
pub fn load_config(path: &Path) -> FaceConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => {
                info!(path = %path.display(), "loaded face config");
                config
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse face config, using defaults"
                );
                FaceConfig::default()
            }
        },
        Err(_) => {
            info!(path = %path.display(), "no face config file, using defaults");
            FaceConfig::default()
        }
    }
}

/// Save a config as pretty-printed JSON, creating parent directories.
pub fn save_config(path: &Path, config: &FaceConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), "saved face config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("face.json");

        let config = FaceConfig {
            transition_ms: 300,
            low_voltage_threshold: 9.5,
            ..FaceConfig::default()
        };

        save_config(&path, &config).unwrap();
        let loaded = load_config(&path);
        assert_eq!(loaded, config, "loaded config should match saved config");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(&dir.path().join("does_not_exist.json"));
        assert_eq!(loaded, FaceConfig::default());
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.json");
        std::fs::write(&path, "{ not json").unwrap();
        let loaded = load_config(&path);
        assert_eq!(loaded, FaceConfig::default());
    }

    #[test]
    fn partial_file_fills_missing_fields_from_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.json");
        std::fs::write(&path, r#"{ "transition_ms": 200 }"#).unwrap();
        let loaded = load_config(&path);
        assert_eq!(loaded.transition_ms, 200);
        assert_eq!(
            loaded.blink_duration_secs,
            FaceConfig::default().blink_duration_secs
        );
    }
}
