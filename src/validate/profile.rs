//! Language profile validator.
//!
//! Checks one profile JSON document: schema shape, semantic-version format,
//! the register-weight simplex, dialect fallback acyclicity, and the numeric
//! bounds on synthesis defaults.

use crate::contracts::profile::LanguageProfile;
use crate::defaults::REGISTER_WEIGHT_TOLERANCE;
use crate::error::Result;
use crate::report::ValidationReport;
use std::fs;
use std::path::Path;

/// Validate a profile JSON document.
///
/// Malformed JSON records `JSON_DECODE` with nothing checked; a document that
/// parses as JSON but not as a profile records `CONTRACT` and counts as
/// checked, as does a parsed profile with semantic issues.
pub fn validate_profile_str(s: &str) -> ValidationReport {
    let mut rep = ValidationReport::new();
    let value: serde_json::Value = match serde_json::from_str(s) {
        Ok(value) => value,
        Err(e) => {
            rep.fail("JSON_DECODE", e.to_string(), None);
            return rep;
        }
    };
    match serde_json::from_value::<LanguageProfile>(value) {
        Ok(profile) => check_profile(&profile, &mut rep),
        Err(e) => rep.fail("CONTRACT", format!("failed profile schema: {e}"), None),
    }
    rep.checked += 1;
    rep
}

/// Validate a profile JSON file on disk.
pub fn validate_profile_file(path: &Path) -> Result<ValidationReport> {
    let contents = fs::read_to_string(path)?;
    Ok(validate_profile_str(&contents))
}

fn check_profile(profile: &LanguageProfile, rep: &mut ValidationReport) {
    if !is_semver(&profile.version) {
        rep.fail(
            "SEMVER",
            format!("version {:?} is not MAJOR.MINOR.PATCH", profile.version),
            Some("version".to_string()),
        );
    }

    let sum: f64 = profile.register_defaults.values().sum();
    if (sum - 1.0).abs() > REGISTER_WEIGHT_TOLERANCE {
        rep.fail(
            "REGISTER_WEIGHTS",
            format!("register_defaults sum to {sum}, expected 1.0"),
            Some("register_defaults".to_string()),
        );
    }

    if profile.fallback_chain.contains(&profile.dialect) {
        rep.fail(
            "FALLBACK_CHAIN",
            format!("fallback_chain cannot include own dialect {:?}", profile.dialect),
            Some("fallback_chain".to_string()),
        );
    }

    let tts = &profile.tts_defaults;
    check_range(rep, "tts_defaults.speaking_rate", tts.speaking_rate, 0.5, 1.8);
    check_range(rep, "tts_defaults.pitch_bias", tts.pitch_bias, -12.0, 12.0);
    check_range(rep, "tts_defaults.pause_bias", tts.pause_bias, 0.0, 1.0);
    check_range(rep, "tts_defaults.filler_bias", tts.filler_bias, 0.0, 1.0);
    check_range(
        rep,
        "curation_targets.phoneme_coverage",
        profile.curation_targets.phoneme_coverage,
        0.0,
        1.0,
    );
}

fn check_range(rep: &mut ValidationReport, field: &str, value: f64, min: f64, max: f64) {
    if !(min..=max).contains(&value) {
        rep.fail(
            "FIELD_RANGE",
            format!("{field} {value} outside [{min},{max}]"),
            Some(field.to_string()),
        );
    }
}

/// MAJOR.MINOR.PATCH with purely numeric components.
fn is_semver(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}
