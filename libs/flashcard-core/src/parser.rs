//! Delimited-text parser for flashcard files.
//!
//! # Format
//! ```text
//! # Fruits
//! apple	red fruit
//! banana	yellow fruit
//! ```
//!
//! One `term<delimiter>definition` pair per line. Blank lines and lines
//! starting with `#` are skipped. Supported delimiters are tab, comma,
//! semicolon, `##` and `|`, or any custom literal.

use crate::error::Result;
use crate::format::detect_format_with;
use crate::reader::{self, DecodedText};
use crate::split::{split_line, split_strict};
use crate::types::{
    Delimiter, DiagnosticKind, Flashcards, Format, LineDiagnostic, ParseMode, ParseStats,
    ParserSettings, ValidationIssue,
};
use crate::validate::validate_with;
use std::path::Path;

const COMMENT_MARKER: char = '#';

/// Everything produced by one parse run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    pub cards: Flashcards,
    pub stats: ParseStats,
    pub diagnostics: Vec<LineDiagnostic>,
}

impl ParseOutcome {
    /// Diagnostics for lines that could not be parsed.
    pub fn malformed(&self) -> impl Iterator<Item = &LineDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.kind, DiagnosticKind::Malformed { .. }))
    }

    /// Diagnostics for terms that replaced an earlier definition.
    pub fn duplicates(&self) -> impl Iterator<Item = &LineDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.kind, DiagnosticKind::DuplicateTerm { .. }))
    }
}

/// Parse `content` into term/definition pairs.
///
/// Never fails: malformed lines are counted in [`ParseStats::errors`] and
/// reported as diagnostics while parsing continues.
pub fn parse(content: &str, delimiter: &Delimiter, mode: ParseMode) -> ParseOutcome {
    let separator = delimiter.as_str();
    let mut outcome = ParseOutcome::default();

    for (idx, raw) in content.lines().enumerate() {
        let line_num = idx + 1;
        outcome.stats.total_lines += 1;

        match classify(raw, separator, mode) {
            LineType::Skip => outcome.stats.skipped_lines += 1,
            LineType::Malformed(line) => {
                tracing::warn!(line = line_num, content = line, "malformed line");
                outcome.stats.errors += 1;
                outcome.diagnostics.push(LineDiagnostic {
                    line: line_num,
                    kind: DiagnosticKind::Malformed {
                        content: line.to_string(),
                    },
                });
            }
            LineType::Pair(term, definition) => {
                if term.is_empty() || definition.is_empty() {
                    outcome.stats.skipped_lines += 1;
                    continue;
                }
                let previous = outcome
                    .cards
                    .insert(term.to_string(), definition.to_string());
                if previous.is_some() {
                    tracing::warn!(line = line_num, term, "duplicate term, keeping later definition");
                    outcome.diagnostics.push(LineDiagnostic {
                        line: line_num,
                        kind: DiagnosticKind::DuplicateTerm {
                            term: term.to_string(),
                        },
                    });
                }
                outcome.stats.valid_pairs += 1;
            }
        }
    }

    tracing::debug!(
        total = outcome.stats.total_lines,
        valid = outcome.stats.valid_pairs,
        skipped = outcome.stats.skipped_lines,
        errors = outcome.stats.errors,
        "parsed content"
    );
    outcome
}

enum LineType<'a> {
    Skip,
    Malformed(&'a str),
    Pair(&'a str, &'a str),
}

fn classify<'a>(raw: &'a str, separator: &str, mode: ParseMode) -> LineType<'a> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return LineType::Skip;
    }

    // Split the raw line: trimming first would eat a tab delimiter.
    let split = match mode {
        ParseMode::Lenient => split_line(raw, separator),
        ParseMode::Strict => split_strict(raw, separator),
    };
    match split {
        Some((term, definition)) => LineType::Pair(term, definition),
        None => LineType::Malformed(line),
    }
}

/// Parser carrying settings and the statistics of its most recent run.
///
/// Each call replaces the previous statistics; nothing accumulates across
/// runs. Use one instance per caller.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    settings: ParserSettings,
    last_stats: ParseStats,
    detected_format: Option<Format>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ParserSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Read a file, detecting its encoding.
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<DecodedText> {
        reader::read_file(path)
    }

    /// Parse with an explicit delimiter and return the pairs.
    pub fn parse_content(&mut self, content: &str, delimiter: &Delimiter) -> Flashcards {
        self.parse_with(content, delimiter).cards
    }

    /// Parse with an explicit delimiter and return the full outcome.
    pub fn parse_with(&mut self, content: &str, delimiter: &Delimiter) -> ParseOutcome {
        self.detected_format = None;
        let outcome = parse(content, delimiter, self.settings.mode);
        self.last_stats = outcome.stats;
        outcome
    }

    /// Detect the delimiter, falling back to the configured default, then
    /// parse.
    pub fn parse_auto(&mut self, content: &str) -> ParseOutcome {
        let detected = detect_format_with(content, self.settings.sample_lines);
        let format = detected.unwrap_or_else(|| {
            tracing::debug!(
                default = self.settings.default_format.as_str(),
                "falling back to default format"
            );
            self.settings.default_format
        });
        let outcome = parse(content, &Delimiter::Format(format), self.settings.mode);
        self.last_stats = outcome.stats;
        self.detected_format = detected;
        outcome
    }

    /// Format found by the last [`Parser::parse_auto`] call, if any.
    pub fn detected_format(&self) -> Option<Format> {
        self.detected_format
    }

    /// Statistics from the most recent parse.
    pub fn stats(&self) -> ParseStats {
        self.last_stats
    }

    /// Validate pairs against the configured limits.
    pub fn validate(&self, cards: &Flashcards) -> Vec<ValidationIssue> {
        validate_with(cards, &self.settings.limits)
    }
}
