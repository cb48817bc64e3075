//! Text segment JSONL validator.

use crate::contracts::segment::TextSegment;
use crate::error::Result;
use crate::report::ValidationReport;
use std::fs;
use std::path::Path;

/// Validate newline-delimited text segments.
///
/// Lines are numbered from 1; blank lines are ignored. A line that fails to
/// parse as JSON records `JSON_DECODE` and does not count as checked. A line
/// that parses as JSON but not as a segment records `CONTRACT`; it still
/// counts as checked, as do segments with label or grounding issues.
pub fn validate_text_jsonl<I, S>(lines: I) -> ValidationReport
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
                rep.fail("JSON_DECODE", format!("Line {i}: {e}"), Some(format!("[{i}]")));
                continue;
            }
        };
        match serde_json::from_value::<TextSegment>(value) {
            Ok(segment) => {
                if segment.labels.is_dialogue.is_none() {
                    rep.fail(
                        "LABEL_MISSING",
                        "Missing labels.is_dialogue",
                        Some(format!("[{i}].labels.is_dialogue")),
                    );
                }
                if segment.source_ref.start >= segment.source_ref.end {
                    rep.fail(
                        "GROUNDING_OFFSETS",
                        "start >= end",
                        Some(format!("[{i}].source_ref")),
                    );
                }
            }
            Err(e) => {
                rep.fail(
                    "CONTRACT",
                    format!("Line {i} failed segment schema: {e}"),
                    Some(format!("[{i}]")),
                );
            }
        }
        rep.checked += 1;
    }
    rep
}

/// Validate a text segment JSONL file on disk.
pub fn validate_text_file(path: &Path) -> Result<ValidationReport> {
    let contents = fs::read_to_string(path)?;
    Ok(validate_text_jsonl(contents.lines()))
}
