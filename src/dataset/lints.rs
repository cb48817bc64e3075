//! Dataset-wide manifest lints.

use crate::dataset::manifest::ManifestRow;
use crate::defaults::ClipLimits;
use std::collections::BTreeSet;
use std::fmt;

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    pub code: String,
    pub message: String,
}

/// Outcome of linting one manifest. `ok` is the conjunction of every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintReport {
    pub ok: bool,
    pub issues: Vec<LintIssue>,
}

impl Default for LintReport {
    fn default() -> Self {
        Self::new()
    }
}

impl LintReport {
    pub fn new() -> Self {
        Self {
            ok: true,
            issues: Vec::new(),
        }
    }

    pub fn fail(&mut self, code: &str, message: impl Into<String>) {
        self.ok = false;
        self.issues.push(LintIssue {
            code: code.to_string(),
            message: message.into(),
        });
    }
}

impl fmt::Display for LintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, issue) in self.issues.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}] {}", issue.code, issue.message)?;
        }
        Ok(())
    }
}

/// Lint a curated manifest before it may become a snapshot.
///
/// No check short-circuits: the report carries every finding. A dataset must
/// be uniform in sample rate (`SAMPLE_RATE_MIX` - a missing rate counts as
/// its own value), every clip must sit inside the duration bounds
/// (`DURATION`), and every row needs text or phonemes
/// (`NO_TEXT_OR_PHONEMES`).
pub fn lint_tts_manifest(rows: &[ManifestRow], limits: &ClipLimits) -> LintReport {
    let mut rep = LintReport::new();

    let rates: BTreeSet<Option<u32>> = rows.iter().map(|row| row.sample_rate).collect();
    if rates.len() > 1 {
        rep.fail("SAMPLE_RATE_MIX", "Multiple sample rates detected");
    }

    for row in rows {
        let duration = row.duration_s.unwrap_or(0.0);
        if !limits.duration_ok(duration) {
            rep.fail("DURATION", format!("{} duration {duration} out of bounds", row.wav));
        }
        let has_text = row.text.as_deref().is_some_and(|t| !t.is_empty());
        let has_phonemes = row.phonemes.as_deref().is_some_and(|p| !p.is_empty());
        if !has_text && !has_phonemes {
            rep.fail("NO_TEXT_OR_PHONEMES", format!("{} missing text/phonemes", row.wav));
        }
    }

    rep
}
