//! Per-file parse reports and their text rendering.

use anyhow::Result;
use flashcard_core::{
    Delimiter, DiagnosticKind, FlashcardEntry, Format, LineDiagnostic, ParseStats, Parser,
    ValidationIssue,
};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// How the delimiter for a file was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatSource {
    Explicit,
    Detected,
    Default,
}

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub encoding: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
    pub delimiter: String,
    pub format_source: FormatSource,
    pub stats: ParseStats,
    pub diagnostics: Vec<LineDiagnostic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<ValidationIssue>>,
    pub cards: Vec<FlashcardEntry>,
}

/// Read, parse and optionally validate one file.
pub fn build_report(
    parser: &mut Parser,
    path: &Path,
    delimiter: Option<&Delimiter>,
    validate: bool,
) -> Result<FileReport> {
    let decoded = parser.read_file(path)?;

    let (outcome, delimiter, format_source) = match delimiter {
        Some(delimiter) => (
            parser.parse_with(&decoded.text, delimiter),
            delimiter.clone(),
            FormatSource::Explicit,
        ),
        None => {
            let outcome = parser.parse_auto(&decoded.text);
            match parser.detected_format() {
                Some(format) => (outcome, format.into(), FormatSource::Detected),
                None => (
                    outcome,
                    parser.settings().default_format.into(),
                    FormatSource::Default,
                ),
            }
        }
    };

    let issues = validate.then(|| parser.validate(&outcome.cards));
    tracing::info!(
        path = %path.display(),
        pairs = outcome.stats.valid_pairs,
        errors = outcome.stats.errors,
        "parsed file"
    );

    Ok(FileReport {
        path: path.display().to_string(),
        encoding: decoded.encoding,
        format: delimiter.format(),
        delimiter: delimiter.as_str().to_string(),
        format_source,
        stats: outcome.stats,
        cards: FlashcardEntry::sorted_from(&outcome.cards),
        diagnostics: outcome.diagnostics,
        issues,
    })
}

/// Reports for every readable file plus the failures, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub reports: Vec<FileReport>,
    pub failures: Vec<(PathBuf, anyhow::Error)>,
}

/// Build a report per file. An unreadable file is recorded and the rest
/// are still processed.
pub fn build_reports(
    parser: &mut Parser,
    files: &[PathBuf],
    delimiter: Option<&Delimiter>,
    validate: bool,
) -> BatchReport {
    let mut batch = BatchReport::default();
    for path in files {
        match build_report(parser, path, delimiter, validate) {
            Ok(report) => batch.reports.push(report),
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "failed to process file");
                batch.failures.push((path.clone(), err));
            }
        }
    }
    batch
}

/// Human readable summary of one report.
pub fn render_text(report: &FileReport) -> String {
    let mut out = String::new();
    let format = match report.format {
        Some(format) => format.as_str().to_string(),
        None => format!("custom {:?}", report.delimiter),
    };
    let source = match report.format_source {
        FormatSource::Explicit => "explicit",
        FormatSource::Detected => "detected",
        FormatSource::Default => "default",
    };
    let stats = &report.stats;

    let _ = writeln!(out, "{}", report.path);
    let _ = writeln!(out, "  encoding: {}", report.encoding);
    let _ = writeln!(out, "  format:   {} ({})", format, source);
    let _ = writeln!(
        out,
        "  lines: {} total, {} valid, {} skipped, {} errors",
        stats.total_lines, stats.valid_pairs, stats.skipped_lines, stats.errors
    );

    for diagnostic in &report.diagnostics {
        let _ = match &diagnostic.kind {
            DiagnosticKind::Malformed { content } => writeln!(
                out,
                "  line {}: malformed line: {}",
                diagnostic.line, content
            ),
            DiagnosticKind::DuplicateTerm { term } => writeln!(
                out,
                "  line {}: duplicate term '{}'",
                diagnostic.line, term
            ),
        };
    }

    if let Some(issues) = &report.issues {
        if issues.is_empty() {
            let _ = writeln!(out, "  validation: ok");
        } else {
            let _ = writeln!(out, "  validation: {} issue(s)", issues.len());
            for issue in issues {
                let _ = writeln!(out, "    '{}': {}", issue.term, issue.reason());
            }
        }
    }

    out
}
