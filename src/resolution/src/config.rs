use std::{fs, io, path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Limits applied while solving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// How many times any one phase loop may run before the solve gives up.
    pub max_phase_iterations: usize,
    /// Wall-clock limit for a whole solve, unlimited when absent.
    pub time_limit_ms: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_phase_iterations: 32,
            time_limit_ms: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read the solver configuration: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid solver configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

impl SolverConfig {
    /// # Errors
    ///
    /// Fails if `text` isn't a valid configuration.
    pub fn from_toml_str(text: &str) -> Result<SolverConfig, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// # Errors
    ///
    /// Fails if the file cannot be read or isn't a valid configuration.
    pub fn load(path: &Path) -> Result<SolverConfig, ConfigError> {
        SolverConfig::from_toml_str(&fs::read_to_string(path)?)
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}
