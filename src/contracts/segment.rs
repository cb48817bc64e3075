//! Text and audio segment contracts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Offsets grounding a segment in its source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub doc_id: String,
    pub start: u64,
    pub end: u64,
}

/// Curation labels attached to a text segment.
///
/// `is_dialogue` is required by the contract but modeled as an `Option` so
/// that its absence is reported as a validation issue instead of failing the
/// whole record parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default)]
    pub is_dialogue: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register_type: Option<String>,
    #[serde(default)]
    pub code_switch_spans: Vec<(u64, u64)>,
}

/// One curated text segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSegment {
    pub text: String,
    pub lang: String,
    pub labels: Labels,
    pub source_ref: SourceRef,
}

/// One diarized audio segment cut from a longer recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSegment {
    pub audio_file: String,
    pub start: f64,
    pub end: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialect_probs: Option<BTreeMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment_confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diarization_confidence: Option<f64>,
}
