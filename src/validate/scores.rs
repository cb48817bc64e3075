//! Segment score JSONL validator.

use crate::defaults::{SCORE_FIELDS, SCORE_MAX, SCORE_MIN};
use crate::error::Result;
use crate::report::ValidationReport;
use std::fs;
use std::path::Path;

/// Validate newline-delimited score records.
///
/// Each of the seven score dimensions is checked independently: missing,
/// non-numeric, or out of [0, 100] records one `SCORE_RANGE` issue at
/// `[line].field`. A line that parses as JSON always counts as checked,
/// valid or not; malformed JSON records `JSON` and is skipped.
pub fn validate_scores_jsonl<I, S>(lines: I) -> ValidationReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rep = ValidationReport::new();
    for (idx, line) in lines.into_iter().enumerate() {
        let i = idx + 1;
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        let value: serde_json::Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                rep.fail("JSON", format!("Line {i}: {e}"), Some(format!("[{i}]")));
                continue;
            }
        };
        for field in SCORE_FIELDS {
            let in_range = value
                .get(field)
                .and_then(serde_json::Value::as_f64)
                .is_some_and(|score| (SCORE_MIN..=SCORE_MAX).contains(&score));
            if !in_range {
                rep.fail(
                    "SCORE_RANGE",
                    format!("{field} must be 0..100"),
                    Some(format!("[{i}].{field}")),
                );
            }
        }
        rep.checked += 1;
    }
    rep
}

/// Validate a score JSONL file on disk.
pub fn validate_scores_file(path: &Path) -> Result<ValidationReport> {
    let contents = fs::read_to_string(path)?;
    Ok(validate_scores_jsonl(contents.lines()))
}
