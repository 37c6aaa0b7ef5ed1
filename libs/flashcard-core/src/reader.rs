//! File reading with encoding detection.
//!
//! Detection order:
//! 1. byte order mark (UTF-8, UTF-16LE, UTF-16BE)
//! 2. NUL byte pattern typical of BOM-less UTF-16
//! 3. valid UTF-8, which includes plain ASCII
//! 4. windows-1252, which maps every byte
//!
//! Malformed sequences decode to U+FFFD instead of failing.

use crate::error::{FlashcardError, Result};
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
use std::fs;
use std::path::Path;

/// Share of NUL bytes at even or odd offsets that marks UTF-16 text.
const UTF16_NUL_RATIO: f64 = 0.3;

/// How many times more NULs the dominant lane must carry.
const UTF16_LANE_FACTOR: usize = 4;

/// Decoded file content with the encoding label used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    /// Lower-case encoding name, e.g. `utf-8`.
    pub encoding: &'static str,
}

/// Read `path` and decode it.
pub fn read_file(path: impl AsRef<Path>) -> Result<DecodedText> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| FlashcardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = decode_bytes(&bytes);
    tracing::debug!(path = %path.display(), encoding = decoded.encoding, bytes = bytes.len(), "read file");
    Ok(decoded)
}

/// Decode raw bytes with a best-effort encoding guess.
pub fn decode_bytes(bytes: &[u8]) -> DecodedText {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (sniff(bytes), bytes),
    };
    let (text, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "replaced malformed byte sequences");
    }
    DecodedText {
        text: text.into_owned(),
        encoding: label(encoding),
    }
}

fn sniff(bytes: &[u8]) -> &'static Encoding {
    if let Some(encoding) = sniff_utf16(bytes) {
        return encoding;
    }
    if std::str::from_utf8(bytes).is_ok() {
        UTF_8
    } else {
        WINDOWS_1252
    }
}

fn sniff_utf16(bytes: &[u8]) -> Option<&'static Encoding> {
    let units = bytes.len() / 2;
    if units == 0 {
        return None;
    }
    let (mut even_nul, mut odd_nul) = (0usize, 0usize);
    for pair in bytes.chunks_exact(2) {
        if pair[0] == 0 {
            even_nul += 1;
        }
        if pair[1] == 0 {
            odd_nul += 1;
        }
    }
    // Characters like U+4E00 put a NUL in the other lane, so compare lanes
    // instead of requiring one to be clean.
    let threshold = (units as f64 * UTF16_NUL_RATIO).ceil() as usize;
    if odd_nul >= threshold && even_nul * UTF16_LANE_FACTOR < odd_nul {
        Some(UTF_16LE)
    } else if even_nul >= threshold && odd_nul * UTF16_LANE_FACTOR < even_nul {
        Some(UTF_16BE)
    } else {
        None
    }
}

fn label(encoding: &'static Encoding) -> &'static str {
    if encoding == UTF_8 {
        "utf-8"
    } else if encoding == UTF_16LE {
        "utf-16le"
    } else if encoding == UTF_16BE {
        "utf-16be"
    } else {
        "windows-1252"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ascii_is_utf8() {
        let decoded = decode_bytes(b"apple\tred fruit");
        assert_eq!(decoded.encoding, "utf-8");
        assert_eq!(decoded.text, "apple\tred fruit");
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let decoded = decode_bytes(b"\xEF\xBB\xBFcaf\xC3\xA9\tcoffee");
        assert_eq!(decoded.encoding, "utf-8");
        assert_eq!(decoded.text, "café\tcoffee");
    }

    #[test]
    fn utf16le_with_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "a\tb".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let decoded = decode_bytes(&bytes);
        assert_eq!(decoded.encoding, "utf-16le");
        assert_eq!(decoded.text, "a\tb");
    }

    #[test]
    fn utf16be_without_bom() {
        let bytes: Vec<u8> = "apple\tred"
            .encode_utf16()
            .flat_map(|unit| unit.to_be_bytes())
            .collect();
        let decoded = decode_bytes(&bytes);
        assert_eq!(decoded.encoding, "utf-16be");
        assert_eq!(decoded.text, "apple\tred");
    }

    #[test]
    fn utf16le_without_bom_with_cjk() {
        let bytes: Vec<u8> = "一\tone\nabc\tdef"
            .encode_utf16()
            .flat_map(|unit| unit.to_le_bytes())
            .collect();
        let decoded = decode_bytes(&bytes);
        assert_eq!(decoded.encoding, "utf-16le");
        assert_eq!(decoded.text, "一\tone\nabc\tdef");
    }

    #[test]
    fn latin1_bytes_fall_back_to_windows_1252() {
        let decoded = decode_bytes(b"caf\xE9\tcoffee");
        assert_eq!(decoded.encoding, "windows-1252");
        assert_eq!(decoded.text, "café\tcoffee");
    }

    #[test]
    fn empty_input() {
        let decoded = decode_bytes(b"");
        assert_eq!(decoded.encoding, "utf-8");
        assert!(decoded.text.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_file("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, FlashcardError::Io { .. }));
    }
}
