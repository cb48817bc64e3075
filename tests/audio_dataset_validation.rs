//! End-to-end tests for the audio dataset validator: real WAV files and CSV
//! manifests on disk, exercised through the public API.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use ttsgate::{ClipLimits, validate_audio_dataset};

fn write_pcm_wav(path: &Path, sample_rate: u32, channels: u16, secs: f64) {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    let frames = (secs * f64::from(sample_rate)) as u32;
    for _ in 0..frames {
        for _ in 0..channels {
            writer.write_sample(0i16).unwrap();
        }
    }
    writer.finalize().unwrap();
}

fn write_float_wav(path: &Path, sample_rate: u32, secs: f64) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    let frames = (secs * f64::from(sample_rate)) as u32;
    for _ in 0..frames {
        writer.write_sample(0.0f32).unwrap();
    }
    writer.finalize().unwrap();
}

/// Clips dir + CSV naming each of `files`, one per row.
fn setup_csv(dir: &TempDir, files: &[&str]) -> std::path::PathBuf {
    let csv_path = dir.path().join("dataset.csv");
    let mut contents = String::from("audio_file,text\n");
    for file in files {
        contents.push_str(&format!("{file},hello\n"));
    }
    fs::write(&csv_path, contents).unwrap();
    csv_path
}

#[test]
fn clean_dataset_validates_with_all_rows_checked() {
    let dir = TempDir::new().unwrap();
    write_pcm_wav(&dir.path().join("a.wav"), 24000, 1, 2.0);
    write_pcm_wav(&dir.path().join("b.wav"), 24000, 1, 3.5);
    let csv = setup_csv(&dir, &["clips/a.wav", "clips/b.wav"]);

    let rep = validate_audio_dataset(dir.path(), &csv, &ClipLimits::default()).unwrap();
    assert!(rep.ok, "{:?}", rep.errors);
    assert_eq!(rep.checked, 2);
    assert!(rep.errors.is_empty());
}

#[test]
fn wav_paths_resolve_by_basename() {
    let dir = TempDir::new().unwrap();
    write_pcm_wav(&dir.path().join("a.wav"), 22050, 1, 2.0);
    // The CSV references a nested path; only the basename is looked up
    let csv = setup_csv(&dir, &["some/deep/path/a.wav"]);

    let rep = validate_audio_dataset(dir.path(), &csv, &ClipLimits::default()).unwrap();
    assert!(rep.ok, "{:?}", rep.errors);
}

#[test]
fn missing_audio_file_field_is_one_issue_and_not_checked() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("dataset.csv");
    fs::write(&csv_path, "audio_file,text\n,orphaned row\n").unwrap();

    let rep = validate_audio_dataset(dir.path(), &csv_path, &ClipLimits::default()).unwrap();
    assert!(!rep.ok);
    assert_eq!(rep.checked, 0);
    assert_eq!(rep.errors.len(), 1);
    assert_eq!(rep.errors[0].code, "CSV_FIELD");
    assert_eq!(rep.errors[0].path.as_deref(), Some("line 2"));
}

#[test]
fn csv_without_audio_file_column_flags_every_row() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("dataset.csv");
    fs::write(&csv_path, "file,text\na.wav,hi\nb.wav,there\n").unwrap();

    let rep = validate_audio_dataset(dir.path(), &csv_path, &ClipLimits::default()).unwrap();
    assert_eq!(rep.checked, 0);
    assert!(rep.errors.iter().all(|e| e.code == "CSV_FIELD"));
    assert_eq!(rep.errors.len(), 2);
}

#[test]
fn absent_wav_skips_header_checks() {
    let dir = TempDir::new().unwrap();
    let csv = setup_csv(&dir, &["clips/ghost.wav"]);

    let rep = validate_audio_dataset(dir.path(), &csv, &ClipLimits::default()).unwrap();
    assert_eq!(rep.checked, 0);
    assert_eq!(rep.errors.len(), 1);
    assert_eq!(rep.errors[0].code, "MISSING_WAV");
}

#[test]
fn off_target_sample_rate_reports_exactly_one_sr_issue() {
    let dir = TempDir::new().unwrap();
    write_pcm_wav(&dir.path().join("a.wav"), 44100, 1, 2.0);
    let csv = setup_csv(&dir, &["clips/a.wav"]);

    let rep = validate_audio_dataset(dir.path(), &csv, &ClipLimits::default()).unwrap();
    let sr_issues = rep.errors.iter().filter(|e| e.code == "SR").count();
    assert_eq!(sr_issues, 1);
    assert_eq!(rep.errors.len(), 1);
}

#[test]
fn stereo_clip_reports_channels() {
    let dir = TempDir::new().unwrap();
    write_pcm_wav(&dir.path().join("a.wav"), 24000, 2, 2.0);
    let csv = setup_csv(&dir, &["clips/a.wav"]);

    let rep = validate_audio_dataset(dir.path(), &csv, &ClipLimits::default()).unwrap();
    assert_eq!(rep.errors.len(), 1);
    assert_eq!(rep.errors[0].code, "CHANNELS");
}

#[test]
fn duration_violations_fire_on_both_ends() {
    let dir = TempDir::new().unwrap();
    write_pcm_wav(&dir.path().join("short.wav"), 24000, 1, 0.5);
    write_pcm_wav(&dir.path().join("long.wav"), 24000, 1, 15.0);
    let csv = setup_csv(&dir, &["clips/short.wav", "clips/long.wav"]);

    let rep = validate_audio_dataset(dir.path(), &csv, &ClipLimits::default()).unwrap();
    let codes: Vec<&str> = rep.errors.iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes, vec!["DURATION", "DURATION"]);
    assert_eq!(rep.checked, 2);
}

#[test]
fn float_wav_reports_bit_depth() {
    let dir = TempDir::new().unwrap();
    write_float_wav(&dir.path().join("a.wav"), 24000, 2.0);
    let csv = setup_csv(&dir, &["clips/a.wav"]);

    let rep = validate_audio_dataset(dir.path(), &csv, &ClipLimits::default()).unwrap();
    assert!(rep.errors.iter().any(|e| e.code == "BIT_DEPTH"));
}

#[test]
fn one_row_can_fire_several_constraint_issues() {
    let dir = TempDir::new().unwrap();
    // Wrong rate, stereo, and too short all at once
    write_pcm_wav(&dir.path().join("bad.wav"), 16000, 2, 0.3);
    let csv = setup_csv(&dir, &["clips/bad.wav"]);

    let rep = validate_audio_dataset(dir.path(), &csv, &ClipLimits::default()).unwrap();
    let codes: Vec<&str> = rep.errors.iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes, vec!["SR", "CHANNELS", "DURATION"]);
    // Header was readable, so the row still counts as checked
    assert_eq!(rep.checked, 1);
}

#[test]
fn unreadable_wav_is_reported_without_aborting_the_run() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("noise.wav"), b"definitely not a wav").unwrap();
    write_pcm_wav(&dir.path().join("good.wav"), 24000, 1, 2.0);
    let csv = setup_csv(&dir, &["clips/noise.wav", "clips/good.wav"]);

    let rep = validate_audio_dataset(dir.path(), &csv, &ClipLimits::default()).unwrap();
    assert_eq!(rep.errors.len(), 1);
    assert_eq!(rep.errors[0].code, "WAV_READ");
    assert_eq!(rep.errors[0].path.as_deref(), Some("line 2"));
    // The good row after the bad one was still processed
    assert_eq!(rep.checked, 1);
}

#[test]
fn header_only_csv_is_ok_with_zero_checked() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("dataset.csv");
    fs::write(&csv_path, "audio_file,text\n").unwrap();

    let rep = validate_audio_dataset(dir.path(), &csv_path, &ClipLimits::default()).unwrap();
    assert!(rep.ok);
    assert_eq!(rep.checked, 0);
}

#[test]
fn issue_paths_track_csv_line_numbers() {
    let dir = TempDir::new().unwrap();
    write_pcm_wav(&dir.path().join("a.wav"), 24000, 1, 2.0);
    let csv = setup_csv(&dir, &["clips/a.wav", "clips/missing1.wav", "clips/missing2.wav"]);

    let rep = validate_audio_dataset(dir.path(), &csv, &ClipLimits::default()).unwrap();
    let paths: Vec<&str> = rep.errors.iter().filter_map(|e| e.path.as_deref()).collect();
    assert_eq!(paths, vec!["line 3", "line 4"]);
}

#[test]
fn relaxed_limits_accept_nonstandard_rates() {
    let dir = TempDir::new().unwrap();
    write_pcm_wav(&dir.path().join("a.wav"), 16000, 1, 2.0);
    let csv = setup_csv(&dir, &["clips/a.wav"]);

    let limits = ClipLimits {
        sample_rates: vec![16000],
        ..ClipLimits::default()
    };
    let rep = validate_audio_dataset(dir.path(), &csv, &limits).unwrap();
    assert!(rep.ok, "{:?}", rep.errors);
}

#[test]
fn missing_csv_file_is_a_hard_error() {
    let dir = TempDir::new().unwrap();
    let result = validate_audio_dataset(
        dir.path(),
        &dir.path().join("nope.csv"),
        &ClipLimits::default(),
    );
    assert!(result.is_err());
}
