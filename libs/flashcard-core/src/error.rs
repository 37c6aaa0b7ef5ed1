//! Error types for flashcard-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using FlashcardError.
pub type Result<T> = std::result::Result<T, FlashcardError>;

/// Hard failures surfaced to the caller.
///
/// Per-line problems never show up here; they are absorbed into
/// [`ParseStats`](crate::types::ParseStats) and line diagnostics.
#[derive(Debug, Error)]
pub enum FlashcardError {
    #[error("failed to read file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("delimiter must not be empty")]
    EmptyDelimiter,
}

impl FlashcardError {
    /// Whether this error came from the filesystem.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_error_display_includes_path_and_cause() {
        let error = FlashcardError::Io {
            path: PathBuf::from("cards.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(error.to_string(), "failed to read file cards.txt: no such file");
        assert!(error.is_io());
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error as _;
        let error = FlashcardError::Io {
            path: PathBuf::from("cards.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.source().is_some());
    }

    #[test]
    fn empty_delimiter_is_not_io() {
        assert!(!FlashcardError::EmptyDelimiter.is_io());
    }
}
