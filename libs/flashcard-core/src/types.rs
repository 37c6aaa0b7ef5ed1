//! Core types for flashcard parsing.

use crate::error::{FlashcardError, Result};
use crate::format::DEFAULT_SAMPLE_LINES;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parsed term -> definition pairs.
pub type Flashcards = HashMap<String, String>;

/// Named delimiter convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    Tsv,
    Csv,
    Semicolon,
    DoubleHash,
    Pipe,
}

impl Default for Format {
    fn default() -> Self {
        Self::Tsv
    }
}

impl Format {
    /// Every supported format, in detection precedence order.
    pub const ALL: [Format; 5] = [
        Self::Tsv,
        Self::Csv,
        Self::Semicolon,
        Self::DoubleHash,
        Self::Pipe,
    ];

    /// Get the format name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tsv => "tsv",
            Self::Csv => "csv",
            Self::Semicolon => "semicolon",
            Self::DoubleHash => "double_hash",
            Self::Pipe => "pipe",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "tsv" => Some(Self::Tsv),
            "csv" => Some(Self::Csv),
            "semicolon" => Some(Self::Semicolon),
            "double_hash" => Some(Self::DoubleHash),
            "pipe" => Some(Self::Pipe),
            _ => None,
        }
    }

    /// Separator between term and definition.
    pub fn delimiter(&self) -> &'static str {
        match self {
            Self::Tsv => "\t",
            Self::Csv => ",",
            Self::Semicolon => ";",
            Self::DoubleHash => "##",
            Self::Pipe => "|",
        }
    }
}

/// Delimiter used for one parse: a known format or an arbitrary literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delimiter {
    Format(Format),
    Custom(String),
}

impl Delimiter {
    /// Resolve user input: a format name wins over a literal separator.
    pub fn resolve(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(FlashcardError::EmptyDelimiter);
        }
        Ok(match Format::from_str(input) {
            Some(format) => Self::Format(format),
            None => Self::Custom(input.to_string()),
        })
    }

    /// The literal separator.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Format(format) => format.delimiter(),
            Self::Custom(literal) => literal,
        }
    }

    /// The named format, if this delimiter corresponds to one.
    pub fn format(&self) -> Option<Format> {
        match self {
            Self::Format(format) => Some(*format),
            Self::Custom(literal) => Format::ALL
                .into_iter()
                .find(|f| f.delimiter() == literal.as_str()),
        }
    }
}

impl From<Format> for Delimiter {
    fn from(format: Format) -> Self {
        Self::Format(format)
    }
}

/// A single term/definition pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardEntry {
    pub term: String,
    pub definition: String,
}

impl FlashcardEntry {
    /// Entries sorted by term, for stable output.
    pub fn sorted_from(cards: &Flashcards) -> Vec<Self> {
        let mut entries: Vec<Self> = cards
            .iter()
            .map(|(term, definition)| Self {
                term: term.clone(),
                definition: definition.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.term.cmp(&b.term));
        entries
    }
}

/// Counters for a single parse run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    pub total_lines: usize,
    pub valid_pairs: usize,
    pub skipped_lines: usize,
    pub errors: usize,
}

/// How lines that don't cleanly match the delimiter are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Primary split, then the fallback chain. Error only if all fail.
    Lenient,
    /// Exactly one delimiter with text on both sides, no fallbacks.
    Strict,
}

impl Default for ParseMode {
    fn default() -> Self {
        Self::Lenient
    }
}

/// Something noteworthy about a specific input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiagnostic {
    /// 1-based line number.
    pub line: usize,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticKind {
    Malformed { content: String },
    DuplicateTerm { term: String },
}

/// Validation rule that a pair violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    EmptyTerm,
    EmptyDefinition,
    TermTooLong,
    DefinitionTooLong,
}

impl IssueKind {
    /// Human readable reason.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::EmptyTerm => "Empty term",
            Self::EmptyDefinition => "Empty definition",
            Self::TermTooLong => "Term too long",
            Self::DefinitionTooLong => "Definition too long",
        }
    }
}

/// One problem found in a set of flashcards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub term: String,
    pub kind: IssueKind,
}

impl ValidationIssue {
    pub fn reason(&self) -> &'static str {
        self.kind.reason()
    }
}

/// Maximum lengths, in characters, accepted by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationLimits {
    pub max_term_len: usize,
    pub max_definition_len: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_term_len: 100,
            max_definition_len: 500,
        }
    }
}

/// Parser configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserSettings {
    /// Used by auto-detection when no format can be inferred.
    pub default_format: Format,
    pub mode: ParseMode,
    /// Number of content lines inspected by format detection.
    pub sample_lines: usize,
    pub limits: ValidationLimits,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            default_format: Format::default(),
            mode: ParseMode::default(),
            sample_lines: DEFAULT_SAMPLE_LINES,
            limits: ValidationLimits::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn format_names_round_trip() {
        for format in Format::ALL {
            assert_eq!(Format::from_str(format.as_str()), Some(format));
        }
        assert_eq!(Format::from_str("markdown"), None);
    }

    #[test]
    fn format_delimiters() {
        assert_eq!(Format::Tsv.delimiter(), "\t");
        assert_eq!(Format::DoubleHash.delimiter(), "##");
        assert_eq!(Format::Pipe.delimiter(), "|");
    }

    #[test]
    fn resolve_prefers_format_name() {
        let delimiter = Delimiter::resolve("csv").unwrap();
        assert_eq!(delimiter, Delimiter::Format(Format::Csv));
        assert_eq!(delimiter.as_str(), ",");
    }

    #[test]
    fn resolve_accepts_literal() {
        let delimiter = Delimiter::resolve("=>").unwrap();
        assert_eq!(delimiter.as_str(), "=>");
        assert_eq!(delimiter.format(), None);
    }

    #[test]
    fn literal_matching_known_separator_reports_format() {
        let delimiter = Delimiter::resolve(";").unwrap();
        assert_eq!(delimiter.format(), Some(Format::Semicolon));
    }

    #[test]
    fn resolve_rejects_empty() {
        assert!(matches!(
            Delimiter::resolve(""),
            Err(FlashcardError::EmptyDelimiter)
        ));
    }

    #[test]
    fn issue_reasons() {
        assert_eq!(IssueKind::EmptyTerm.reason(), "Empty term");
        assert_eq!(IssueKind::EmptyDefinition.reason(), "Empty definition");
        assert_eq!(IssueKind::TermTooLong.reason(), "Term too long");
        assert_eq!(IssueKind::DefinitionTooLong.reason(), "Definition too long");
    }

    #[test]
    fn sorted_entries() {
        let mut cards = Flashcards::new();
        cards.insert("pear".into(), "green".into());
        cards.insert("apple".into(), "red".into());
        let entries = FlashcardEntry::sorted_from(&cards);
        assert_eq!(entries[0].term, "apple");
        assert_eq!(entries[1].term, "pear");
    }

    #[test]
    fn default_settings() {
        let settings = ParserSettings::default();
        assert_eq!(settings.default_format, Format::Tsv);
        assert_eq!(settings.mode, ParseMode::Lenient);
        assert_eq!(settings.limits.max_term_len, 100);
        assert_eq!(settings.limits.max_definition_len, 500);
    }
}
