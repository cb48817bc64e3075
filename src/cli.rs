//! Command-line interface for ttsgate
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Format guardians and dataset builder for TTS training corpora
#[derive(Parser, Debug)]
#[command(
    name = "ttsgate",
    version,
    about = "Format guardians and dataset builder for TTS training corpora"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress the success summary line
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate pipeline artifacts against their format contracts
    Validate {
        #[command(subcommand)]
        target: ValidateTarget,
    },

    /// Build training dataset snapshots
    Build {
        #[command(subcommand)]
        target: BuildTarget,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Artifact kinds the format guardians cover
#[derive(Subcommand, Debug)]
pub enum ValidateTarget {
    /// Cross-check a clip CSV against the WAV files it references
    Audio {
        /// CSV manifest with an audio_file column
        #[arg(long, value_name = "FILE")]
        csv: PathBuf,

        /// Directory containing the referenced WAV clips
        #[arg(long, value_name = "DIR")]
        clips_dir: PathBuf,
    },

    /// Validate a text-segment JSONL file
    Text {
        /// JSONL file, one segment per line
        #[arg(long, value_name = "FILE")]
        path: PathBuf,
    },

    /// Validate a segment-score JSONL file
    Scores {
        /// JSONL file, one score record per line
        #[arg(long, value_name = "FILE")]
        path: PathBuf,
    },

    /// Validate a language profile JSON file
    Profile {
        /// Profile JSON document
        #[arg(long, value_name = "FILE")]
        path: PathBuf,
    },
}

/// Snapshot kinds the builder can emit
#[derive(Subcommand, Debug)]
pub enum BuildTarget {
    /// Build a TTS snapshot from a curated manifest
    Tts {
        /// Curated manifest.jsonl from the curation stage
        #[arg(long, value_name = "FILE")]
        input_manifest: PathBuf,

        /// Output dataset directory (created if missing)
        #[arg(long, value_name = "DIR")]
        out_dir: PathBuf,

        /// Write phoneme strings into the metadata text column
        #[arg(long)]
        use_phonemes: bool,
    },
}
