//! Error types for ttsgate.

use crate::dataset::lints::LintReport;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TtsgateError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Input parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid manifest line {line}: {message}")]
    ManifestParse { line: usize, message: String },

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    // Dataset build gate
    #[error("Dataset lints failed:\n{report}")]
    LintFailed { report: LintReport },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, TtsgateError>;
