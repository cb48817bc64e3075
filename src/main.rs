use anyhow::Result;
use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;
use ttsgate::TtsgateError;
use ttsgate::cli::{BuildTarget, Cli, Commands, ValidateTarget};
use ttsgate::config::Config;
use ttsgate::dataset::build::build_tts_snapshot;
use ttsgate::dataset::manifest::load_manifest_jsonl;
use ttsgate::report::ValidationReport;
use ttsgate::validate::audio::validate_audio_dataset;
use ttsgate::validate::profile::validate_profile_file;
use ttsgate::validate::scores::validate_scores_file;
use ttsgate::validate::text::validate_text_file;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Validate { target } => {
            let (report, what) = run_validation(&target, &config)?;
            finish_validation(&report, what, cli.quiet);
        }
        Commands::Build {
            target:
                BuildTarget::Tts {
                    input_manifest,
                    out_dir,
                    use_phonemes,
                },
        } => {
            let rows = load_manifest_jsonl(&input_manifest)?;
            let limits = config.audio.clip_limits();
            let use_phonemes = use_phonemes || config.dataset.use_phonemes;
            match build_tts_snapshot(&out_dir, &rows, use_phonemes, &limits) {
                Ok(paths) => {
                    if !cli.quiet {
                        println!(
                            "{}",
                            format!(
                                "OK: wrote {}, {}, {}",
                                paths.metadata_csv.display(),
                                paths.manifest.display(),
                                paths.dataset_card.display()
                            )
                            .green()
                        );
                    }
                }
                Err(TtsgateError::LintFailed { report }) => {
                    for issue in &report.issues {
                        eprintln!("{}", format!("[{}] {}", issue.code, issue.message).red());
                    }
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "ttsgate", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/ttsgate/config.toml)
/// 3. Built-in defaults with environment variable overrides
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config> {
    let config = if let Some(path) = custom_path {
        Config::load(path)?
    } else {
        Config::load_or_default(&Config::default_path())?
    };
    Ok(config.with_env_overrides())
}

/// Dispatch one validator and name what it counted for the summary line.
fn run_validation(
    target: &ValidateTarget,
    config: &Config,
) -> Result<(ValidationReport, &'static str)> {
    let outcome = match target {
        ValidateTarget::Audio { csv, clips_dir } => {
            let limits = config.audio.clip_limits();
            (validate_audio_dataset(clips_dir, csv, &limits)?, "rows")
        }
        ValidateTarget::Text { path } => (validate_text_file(path)?, "segments"),
        ValidateTarget::Scores { path } => (validate_scores_file(path)?, "scores"),
        ValidateTarget::Profile { path } => (validate_profile_file(path)?, "profiles"),
    };
    Ok(outcome)
}

/// Print the report and exit: 0 with a summary line on success, 1 with one
/// issue line per finding on stderr otherwise.
fn finish_validation(report: &ValidationReport, what: &str, quiet: bool) {
    if report.ok {
        if !quiet {
            println!("{}", format!("OK: {} {what} validated", report.checked).green());
        }
    } else {
        for issue in &report.errors {
            eprintln!("{}", issue.to_string().red());
        }
        std::process::exit(1);
    }
}
