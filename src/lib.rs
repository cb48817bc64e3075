//! ttsgate - format guardians for TTS training corpora.
//!
//! Validates the artifacts that feed a dataset snapshot (clip CSVs + WAV
//! files, text-segment and score JSONL, language profiles), lints curated
//! manifests for dataset-wide invariants, and assembles snapshot outputs.

// Enforce error handling discipline
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod cli;
pub mod config;
pub mod contracts;
pub mod dataset;
pub mod defaults;
pub mod error;
pub mod report;
pub mod validate;

// Contract types (produced upstream, checked here)
pub use contracts::profile::LanguageProfile;
pub use contracts::score::SegmentScore;
pub use contracts::segment::{AudioSegment, TextSegment};

// Validators
pub use validate::audio::validate_audio_dataset;
pub use validate::profile::{validate_profile_file, validate_profile_str};
pub use validate::scores::validate_scores_jsonl;
pub use validate::text::validate_text_jsonl;

// Dataset assembly
pub use dataset::build::{SnapshotPaths, build_tts_snapshot};
pub use dataset::lints::{LintIssue, LintReport, lint_tts_manifest};
pub use dataset::manifest::{ManifestRow, load_manifest_jsonl};

// Reports
pub use report::{ValidationIssue, ValidationReport};

// Error handling
pub use defaults::ClipLimits;
pub use error::{Result, TtsgateError};
