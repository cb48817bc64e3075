//! TTS snapshot builder.
//!
//! Turns a linted manifest into the three snapshot artifacts: a
//! pipe-delimited metadata table, a line-delimited manifest, and a dataset
//! card with aggregate statistics. All writes are full overwrites, so
//! rebuilding from identical input yields byte-identical files.

use crate::dataset::lints::lint_tts_manifest;
use crate::dataset::manifest::ManifestRow;
use crate::defaults::{ClipLimits, SPEAKER_PLACEHOLDER};
use crate::error::{Result, TtsgateError};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Locations of the three snapshot artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotPaths {
    pub manifest: PathBuf,
    pub metadata_csv: PathBuf,
    pub dataset_card: PathBuf,
}

/// Aggregate statistics written to `dataset_card.json`.
#[derive(Debug, Serialize)]
struct DatasetCard {
    clips: usize,
    /// Distinct sample rates present, sorted. Singleton after a clean lint.
    sample_rate: Vec<Option<u32>>,
    /// Total audio duration in minutes.
    minutes: f64,
}

/// Build a TTS snapshot in `out_dir` from curated rows.
///
/// Lints first and fails fast on any finding - the returned
/// [`TtsgateError::LintFailed`] carries the full report and nothing is
/// written, not even the output directory. On success writes
/// `manifest.jsonl`, `metadata.csv`, and `dataset_card.json` (in that
/// order), plus an empty `clips/` directory for the clip copy step.
pub fn build_tts_snapshot(
    out_dir: &Path,
    rows: &[ManifestRow],
    use_phonemes: bool,
    limits: &ClipLimits,
) -> Result<SnapshotPaths> {
    let lint = lint_tts_manifest(rows, limits);
    if !lint.ok {
        return Err(TtsgateError::LintFailed { report: lint });
    }

    fs::create_dir_all(out_dir.join("clips"))?;
    let manifest = write_manifest_jsonl(out_dir, rows)?;
    let metadata_csv = write_metadata_csv(out_dir, rows, use_phonemes)?;
    let dataset_card = write_dataset_card(out_dir, rows)?;

    Ok(SnapshotPaths {
        manifest,
        metadata_csv,
        dataset_card,
    })
}

/// One serialized row per line, input order, full overwrite.
fn write_manifest_jsonl(out_dir: &Path, rows: &[ManifestRow]) -> Result<PathBuf> {
    let path = out_dir.join("manifest.jsonl");
    let mut file = BufWriter::new(File::create(&path)?);
    for row in rows {
        serde_json::to_writer(&mut file, row)?;
        file.write_all(b"\n")?;
    }
    file.flush()?;
    Ok(path)
}

/// Pipe-delimited `clip|text|speaker` table, one row per input row.
fn write_metadata_csv(out_dir: &Path, rows: &[ManifestRow], use_phonemes: bool) -> Result<PathBuf> {
    let path = out_dir.join("metadata.csv");
    let mut writer = csv::WriterBuilder::new().delimiter(b'|').from_path(&path)?;
    for row in rows {
        writer.write_record([
            row.wav.as_str(),
            row.rendered_text(use_phonemes),
            row.speaker_id.as_deref().unwrap_or(SPEAKER_PLACEHOLDER),
        ])?;
    }
    writer.flush()?;
    Ok(path)
}

fn write_dataset_card(out_dir: &Path, rows: &[ManifestRow]) -> Result<PathBuf> {
    let rates: BTreeSet<Option<u32>> = rows.iter().map(|row| row.sample_rate).collect();
    let card = DatasetCard {
        clips: rows.len(),
        sample_rate: rates.into_iter().collect(),
        minutes: rows.iter().map(|row| row.duration_s.unwrap_or(0.0)).sum::<f64>() / 60.0,
    };
    let path = out_dir.join("dataset_card.json");
    fs::write(&path, serde_json::to_string_pretty(&card)?)?;
    Ok(path)
}
