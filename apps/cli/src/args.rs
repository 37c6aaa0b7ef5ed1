//! Command-line arguments.

use anyhow::{Context, Result};
use clap::Parser;
use flashcard_core::{Delimiter, ParseMode, ParserSettings};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions picked up when a directory is given.
const STUDY_FILE_EXTENSIONS: [&str; 3] = ["txt", "tsv", "csv"];

#[derive(Parser, Debug)]
#[command(name = "flashcards", version, about = "Parse delimited flashcard study files")]
pub struct Cli {
    /// Files, or directories containing .txt/.tsv/.csv files.
    #[arg(required_unless_present = "list_formats")]
    pub paths: Vec<PathBuf>,

    /// Format name (tsv, csv, semicolon, double_hash, pipe) or a literal
    /// delimiter. Detected per file when omitted.
    #[arg(short = 'f', long = "format", env = "FLASHCARDS_FORMAT")]
    pub format: Option<String>,

    /// Only accept lines containing the delimiter exactly once.
    #[arg(long = "strict", env = "FLASHCARDS_STRICT", default_value_t = false)]
    pub strict: bool,

    /// Report validation issues for the parsed pairs.
    #[arg(long = "validate", default_value_t = false)]
    pub validate: bool,

    /// Emit a JSON document instead of a text summary.
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,

    /// Print supported format names and exit.
    #[arg(long = "list-formats", default_value_t = false)]
    pub list_formats: bool,
}

impl Cli {
    pub fn settings(&self) -> ParserSettings {
        ParserSettings {
            mode: if self.strict {
                ParseMode::Strict
            } else {
                ParseMode::Lenient
            },
            ..ParserSettings::default()
        }
    }

    /// Explicit delimiter, or `None` to auto-detect.
    pub fn delimiter(&self) -> Result<Option<Delimiter>> {
        self.format
            .as_deref()
            .map(|input| Delimiter::resolve(input).context("invalid --format"))
            .transpose()
    }
}

/// Expand directories into their study files. Files are kept as given.
pub fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(study_files_in(path)?);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn study_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_study_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn is_study_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| {
            STUDY_FILE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
