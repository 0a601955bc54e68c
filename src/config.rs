use nord_pixel::{ReductionStrategy, DEFAULT_GAP, DEFAULT_PIXEL_SIZE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Default output file when none is given on the command line or in config.
pub const DEFAULT_OUTPUT: &str = "nord_pixel_art.png";

/// Conversion settings loaded from a YAML file
///
/// Every field is optional; command-line values take precedence.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    /// Output file path
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Block edge length in source pixels
    #[serde(default)]
    pub pixel_size: Option<u32>,

    /// Border width between blocks in output pixels
    #[serde(default)]
    pub gap: Option<u32>,

    /// Block reduction strategy ("average" or "resample")
    #[serde(default)]
    pub strategy: Option<ReductionStrategy>,
}

impl ConvertConfig {
    /// Load configuration from a YAML file
    ///
    /// Unlike a missing optional setting, an unreadable or malformed file is
    /// an error: the user pointed at it explicitly.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_yaml(&content).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from a YAML string. An empty document is the
    /// default config.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Output path, falling back to [`DEFAULT_OUTPUT`]
    pub fn output_or_default(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Block size, falling back to the library default
    pub fn pixel_size_or_default(&self) -> u32 {
        self.pixel_size.unwrap_or(DEFAULT_PIXEL_SIZE)
    }

    /// Gap, falling back to the library default
    pub fn gap_or_default(&self) -> u32 {
        self.gap.unwrap_or(DEFAULT_GAP)
    }

    /// Strategy, falling back to averaging
    pub fn strategy_or_default(&self) -> ReductionStrategy {
        self.strategy.unwrap_or_default()
    }
}
