//! Audio dataset validator.
//!
//! Cross-references a clip CSV against the WAV files it names, checking each
//! referenced file's header against the per-clip constraints (sample rate,
//! channel count, duration, bit depth).

use crate::defaults::{CLIP_BITS_PER_SAMPLE, CLIP_CHANNELS, ClipLimits};
use crate::error::Result;
use crate::report::ValidationReport;
use std::ffi::OsStr;
use std::path::Path;

/// WAV header metadata, read without decoding samples.
struct WavMeta {
    sample_rate: u32,
    channels: u16,
    duration_s: f64,
    bits_per_sample: u16,
    sample_format: hound::SampleFormat,
}

fn wav_meta(path: &Path) -> Result<WavMeta> {
    let reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    // duration() is frames (samples per channel)
    let duration_s = f64::from(reader.duration()) / f64::from(spec.sample_rate);
    Ok(WavMeta {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        duration_s,
        bits_per_sample: spec.bits_per_sample,
        sample_format: spec.sample_format,
    })
}

/// Validate every row of `csv_path` against the WAV files in `clips_dir`.
///
/// Rows are located by CSV line number (the header is line 1). A row missing
/// its `audio_file` field records `CSV_FIELD`; a row whose resolved file is
/// absent records `MISSING_WAV`; an unreadable WAV records `WAV_READ`. All
/// three skip the row's remaining checks. Otherwise the four header
/// constraints are checked independently (`SR`, `CHANNELS`, `DURATION`,
/// `BIT_DEPTH` - several may fire for one row) and the row counts as
/// checked. A zero-row CSV yields `checked = 0, ok = true`.
///
/// Returns `Err` only when the CSV itself cannot be opened or iterated.
pub fn validate_audio_dataset(
    clips_dir: &Path,
    csv_path: &Path,
    limits: &ClipLimits,
) -> Result<ValidationReport> {
    let mut rep = ValidationReport::new();
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(csv_path)?;
    let audio_idx = reader.headers()?.iter().position(|h| h == "audio_file");

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let line = i + 2;
        let path = Some(format!("line {line}"));

        let rel = audio_idx.and_then(|idx| record.get(idx)).unwrap_or("");
        if rel.is_empty() {
            rep.fail("CSV_FIELD", "audio_file missing", path);
            continue;
        }

        // Only the basename matters: upstream manifests reference clips as
        // "clips/<name>.wav" while the files live flat in clips_dir.
        let base = Path::new(rel).file_name().unwrap_or_else(|| OsStr::new(rel));
        let wav = clips_dir.join(base);
        if !wav.exists() {
            rep.fail("MISSING_WAV", format!("{} not found", wav.display()), path);
            continue;
        }

        let meta = match wav_meta(&wav) {
            Ok(meta) => meta,
            Err(e) => {
                rep.fail("WAV_READ", format!("{}: {e}", wav.display()), path);
                continue;
            }
        };

        if !limits.sample_rate_ok(meta.sample_rate) {
            rep.fail(
                "SR",
                format!(
                    "{}: sample rate {} not in {:?}",
                    wav.display(),
                    meta.sample_rate,
                    limits.sample_rates
                ),
                path.clone(),
            );
        }
        if meta.channels != CLIP_CHANNELS {
            rep.fail(
                "CHANNELS",
                format!("{}: channels {} != 1", wav.display(), meta.channels),
                path.clone(),
            );
        }
        if !limits.duration_ok(meta.duration_s) {
            rep.fail(
                "DURATION",
                format!(
                    "{}: duration {:.2}s outside [{},{}]",
                    wav.display(),
                    meta.duration_s,
                    limits.min_secs,
                    limits.max_secs
                ),
                path.clone(),
            );
        }
        if meta.bits_per_sample != CLIP_BITS_PER_SAMPLE
            || meta.sample_format != hound::SampleFormat::Int
        {
            rep.fail(
                "BIT_DEPTH",
                format!("{}: must be 16-bit PCM", wav.display()),
                path,
            );
        }
        rep.checked += 1;
    }

    Ok(rep)
}
