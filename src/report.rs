//! Issue accumulation for format guardians.
//!
//! Validators never stop at the first problem: every violation is recorded
//! against the report and processing continues, so one run surfaces the full
//! repair list for an artifact.

use std::fmt;

/// A single detected violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Machine-readable code, e.g. `SR` or `GROUNDING_OFFSETS`.
    pub code: String,
    /// Human-readable description.
    pub message: String,
    /// Location of the violation (line index, field path), when known.
    pub path: Option<String>,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "[{}] {} @ {}", self.code, self.message, path),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

/// Outcome of validating one artifact.
///
/// `checked` counts records that were structurally parseable, whether or not
/// they turned out to be valid. `ok` is false iff any issue was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub ok: bool,
    pub checked: usize,
    pub errors: Vec<ValidationIssue>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            ok: true,
            checked: 0,
            errors: Vec::new(),
        }
    }

    /// Record a violation and mark the report failed.
    pub fn fail(&mut self, code: &str, message: impl Into<String>, path: Option<String>) {
        self.ok = false;
        self.errors.push(ValidationIssue {
            code: code.to_string(),
            message: message.into(),
            path,
        });
    }
}
