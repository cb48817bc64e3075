//! Segment quality score contract.

use serde::{Deserialize, Serialize};

/// Quality scores for one curated segment, each dimension on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentScore {
    pub clarity: f64,
    pub alignment: f64,
    pub diarization: f64,
    pub transcript_accuracy: f64,
    /// Language and register validity.
    pub validity: f64,
    /// Length and structure.
    pub shape: f64,
    pub total: f64,
    pub eligible_learner: bool,
    pub eligible_training: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SegmentScore {
    /// The seven numeric dimensions, paired with their field names in the
    /// order the score contract defines them.
    pub fn dimensions(&self) -> [(&'static str, f64); 7] {
        [
            ("clarity", self.clarity),
            ("alignment", self.alignment),
            ("diarization", self.diarization),
            ("transcript_accuracy", self.transcript_accuracy),
            ("validity", self.validity),
            ("shape", self.shape),
            ("total", self.total),
        ]
    }
}
