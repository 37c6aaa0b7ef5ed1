//! Core flashcard library shared by the command-line app.
//!
//! Provides:
//! - Delimited-text parser for term/definition study files
//! - Delimiter format detection (tsv, csv, semicolon, double_hash, pipe)
//! - Validation of parsed pairs
//! - File reading with encoding detection
//! - Shared types (Format, Delimiter, ParseStats, ValidationIssue, etc.)

pub mod error;
pub mod format;
pub mod parser;
pub mod reader;
pub mod split;
pub mod types;
pub mod validate;

pub use error::{FlashcardError, Result};
pub use format::{detect_format, detect_format_with, supported_formats};
pub use parser::{parse, ParseOutcome, Parser};
pub use reader::{decode_bytes, read_file, DecodedText};
pub use types::{
    Delimiter, DiagnosticKind, FlashcardEntry, Flashcards, Format, IssueKind, LineDiagnostic,
    ParseMode, ParseStats, ParserSettings, ValidationIssue, ValidationLimits,
};
pub use validate::{validate, validate_with};
