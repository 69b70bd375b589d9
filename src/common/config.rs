//! Run configuration loading.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::broadcast::MATCH_TOLERANCE;
use crate::error::{BroadcastError, Result};

/// Name of the optional configuration file looked up next to the locations file.
pub const CONFIG_FILE_NAME: &str = "bip.toml";

/// Report format written to standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for one run. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct RunConfig {
    /// Per-coordinate tolerance under which two input nodes are reported as coincident.
    /// Only affects warnings; coincident nodes keep distinct ids.
    pub match_tolerance: f64,
    /// Emit a snapshot after every round.
    pub report_rounds: bool,
    pub output: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            match_tolerance: MATCH_TOLERANCE,
            report_rounds: true,
            output: OutputFormat::Text,
        }
    }
}

impl RunConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// `Config` if the file cannot be read, is not valid TOML, or holds invalid values.
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| BroadcastError::Config(format!("failed to read {}: {}", config_path.display(), e)))?;
        Self::parse(&content).map_err(|e| BroadcastError::Config(format!("{}: {}", config_path.display(), e)))
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        let config: RunConfig = toml::from_str(content).map_err(|e| e.to_string())?;
        if !config.match_tolerance.is_finite() || config.match_tolerance <= 0.0 {
            return Err(format!("match-tolerance must be a positive number, got {}", config.match_tolerance));
        }
        Ok(config)
    }

    /// Configuration for the given locations file: `bip.toml` in the same directory
    /// if it exists, defaults otherwise.
    pub fn for_input(input_path: &Path) -> Result<Self> {
        let config_path = Self::config_path_for(input_path);
        if !config_path.is_file() {
            return Ok(Self::default());
        }
        log::info!("Using configuration from {}", config_path.display());
        Self::load(&config_path)
    }

    /// Derive the config path from a locations file path.
    pub fn config_path_for(input_path: &Path) -> PathBuf {
        input_path.parent().unwrap_or(Path::new(".")).join(CONFIG_FILE_NAME)
    }
}
