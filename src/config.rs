use crate::defaults::{ClipLimits, MAX_CLIP_SECS, MIN_CLIP_SECS, TARGET_SAMPLE_RATES};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub audio: AudioConfig,
    pub dataset: DatasetConfig,
}

/// Per-clip constraint configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub target_sample_rates: Vec<u32>,
    pub min_clip_secs: f64,
    pub max_clip_secs: f64,
}

/// Dataset build configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct DatasetConfig {
    /// Write phoneme strings to the metadata table by default.
    pub use_phonemes: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            target_sample_rates: TARGET_SAMPLE_RATES.to_vec(),
            min_clip_secs: MIN_CLIP_SECS,
            max_clip_secs: MAX_CLIP_SECS,
        }
    }
}

impl AudioConfig {
    /// The constraint bundle handed to the audio validator and the linter.
    pub fn clip_limits(&self) -> ClipLimits {
        ClipLimits {
            sample_rates: self.target_sample_rates.clone(),
            min_secs: self.min_clip_secs,
            max_secs: self.max_clip_secs,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only a missing file falls back to defaults; invalid TOML is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - TTSGATE_MIN_CLIP_SECS → audio.min_clip_secs
    /// - TTSGATE_MAX_CLIP_SECS → audio.max_clip_secs
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(raw) = std::env::var("TTSGATE_MIN_CLIP_SECS")
            && let Ok(secs) = raw.parse::<f64>()
        {
            self.audio.min_clip_secs = secs;
        }

        if let Ok(raw) = std::env::var("TTSGATE_MAX_CLIP_SECS")
            && let Ok(secs) = raw.parse::<f64>()
        {
            self.audio.max_clip_secs = secs;
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/ttsgate/config.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ttsgate")
            .join("config.toml")
    }
}
