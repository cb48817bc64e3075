//! Curated manifest rows.

use crate::error::{Result, TtsgateError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One curated clip as emitted by the curation stage.
///
/// Upstream tools attach their own annotations to manifest rows; unknown
/// keys are captured in `extra` and written back verbatim on rebuild, so a
/// load-and-build round trip never drops them. `sample_rate` and
/// `duration_s` stay optional - their absence is a lint finding, not a parse
/// failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestRow {
    /// Relative clip path, e.g. `clips/a1b2.wav`.
    pub wav: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonemes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_s: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ManifestRow {
    /// The value for the metadata table's text column: phonemes when
    /// requested, plain text otherwise. Missing values render empty.
    pub fn rendered_text(&self, use_phonemes: bool) -> &str {
        let field = if use_phonemes { &self.phonemes } else { &self.text };
        field.as_deref().unwrap_or_default()
    }
}

/// Load a curated manifest, skipping blank lines.
///
/// Unlike the validators, manifest loading is strict: a malformed line means
/// the curation stage itself misbehaved, and the build should not continue.
pub fn load_manifest_jsonl(path: &Path) -> Result<Vec<ManifestRow>> {
    let reader = BufReader::new(File::open(path)?);
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = serde_json::from_str(line).map_err(|e| TtsgateError::ManifestParse {
            line: idx + 1,
            message: e.to_string(),
        })?;
        rows.push(row);
    }
    Ok(rows)
}
