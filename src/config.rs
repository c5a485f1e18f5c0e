//! Engine configuration.
//!
//! This module provides [`EngineConfig`], loaded from a YAML file. Every
//! field has a default, so deployments only write the keys they change and
//! embedded callers can use [`EngineConfig::default`] without touching the
//! filesystem at all.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Default location of the local attendance snapshot.
pub const DEFAULT_DATA_FILE: &str = "data/attendance.json";

/// Runtime configuration for the attendance engine.
///
/// # Example
///
/// A minimal `engine.yaml`:
///
/// ```yaml
/// data_file: /var/lib/attendance/attendance.json
/// verify_day_codes: true
/// ```
///
/// ```no_run
/// use attendance_engine::config::EngineConfig;
///
/// let config = EngineConfig::load("./engine.yaml")?;
/// println!("snapshot path: {}", config.data_file.display());
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Path of the local JSON snapshot file.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// When true, imports cross-check each printed day-of-week code
    /// against the calendar weekday of the parsed date and log mismatches.
    /// The printed code is trusted for classification either way.
    #[serde(default)]
    pub verify_day_codes: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            verify_day_codes: false,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./engine.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration, `ConfigNotFound` if the file cannot
    /// be read, or `ConfigParseError` if it is not valid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
