//! Language profile contract.
//!
//! A profile captures everything the synthesis stack needs to know about one
//! language/dialect pair: phoneme inventory, grapheme-to-phoneme rules,
//! register and style defaults, and the dialect fallback chain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One grapheme-to-phoneme rewrite rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct G2pRule {
    pub pattern: String,
    pub ipa: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub priority: i32,
}

/// Whole-word pronunciation override, optionally scoped to one dialect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct G2pOverride {
    pub word: String,
    pub ipa: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Default synthesis parameters for the profile.
///
/// Bounds: `speaking_rate` in [0.5, 1.8], `pitch_bias` in [-12, 12]
/// semitones, `pause_bias` and `filler_bias` in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TtsDefaults {
    pub speaking_rate: f64,
    pub pitch_bias: f64,
    pub pause_bias: f64,
    pub filler_bias: f64,
}

impl Default for TtsDefaults {
    fn default() -> Self {
        Self {
            speaking_rate: 1.0,
            pitch_bias: 0.0,
            pause_bias: 0.1,
            filler_bias: 0.05,
        }
    }
}

/// Targets the curation stage aims for when assembling this profile's corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurationTargets {
    pub min_minutes_90: f64,
    /// Fraction of the phoneme inventory that must be covered, in [0, 1].
    pub phoneme_coverage: f64,
    pub target_dialect_mix: Option<BTreeMap<String, f64>>,
}

impl Default for CurationTargets {
    fn default() -> Self {
        Self {
            min_minutes_90: 0.0,
            phoneme_coverage: 0.9,
            target_dialect_mix: None,
        }
    }
}

/// How synthesis for this profile is provisioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TtsStrategy {
    #[default]
    Standalone,
    Grouped,
    CloudFallback,
}

/// A versioned language/dialect profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageProfile {
    pub language: String,
    pub dialect: String,
    pub script: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub phoneme_inventory: Vec<String>,
    #[serde(default)]
    pub g2p_rules: Vec<G2pRule>,
    #[serde(default)]
    pub g2p_overrides: Vec<G2pOverride>,
    #[serde(default)]
    pub lexicon_refs: Vec<String>,
    /// Register mix the corpus should follow; weights must sum to 1.0.
    #[serde(default = "default_register_defaults")]
    pub register_defaults: BTreeMap<String, f64>,
    #[serde(default = "default_style_tokens")]
    pub style_tokens: Vec<String>,
    #[serde(default = "default_emotion_tokens")]
    pub emotion_tokens: Vec<String>,
    #[serde(default)]
    pub tts_defaults: TtsDefaults,
    /// Dialects to fall back to, nearest first. Must not contain `dialect`.
    #[serde(default)]
    pub fallback_chain: Vec<String>,
    #[serde(default)]
    pub curation_targets: CurationTargets,
    #[serde(default)]
    pub tts_strategy: TtsStrategy,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_register_defaults() -> BTreeMap<String, f64> {
    BTreeMap::from([("formal".to_string(), 0.3), ("informal".to_string(), 0.7)])
}

fn default_style_tokens() -> Vec<String> {
    ["calm", "conversational", "storytelling"]
        .map(String::from)
        .to_vec()
}

fn default_emotion_tokens() -> Vec<String> {
    ["neutral", "excited", "reassuring"].map(String::from).to_vec()
}
