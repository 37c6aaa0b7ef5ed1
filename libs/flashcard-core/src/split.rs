//! Splitting a single line into term and definition.
//!
//! The delimiter split is tried first. If the delimiter does not occur in
//! the line, the fallbacks run in order and the first success wins:
//! double space, colon, first whitespace run.

/// A fallback strategy. Returns trimmed, non-empty parts or nothing.
type Fallback = fn(&str) -> Option<(&str, &str)>;

const FALLBACKS: [Fallback; 3] = [split_double_space, split_colon, split_whitespace];

/// Split `line` into `(term, definition)`, consulting fallbacks when the
/// delimiter is absent.
///
/// A delimiter hit is returned even if one side is empty; callers decide
/// what to do with degenerate pairs.
pub fn split_line<'a>(line: &'a str, delimiter: &str) -> Option<(&'a str, &'a str)> {
    split_primary(line, delimiter).or_else(|| split_fallback(line.trim()))
}

/// Split on the first occurrence of `delimiter` and trim both sides.
pub fn split_primary<'a>(line: &'a str, delimiter: &str) -> Option<(&'a str, &'a str)> {
    if delimiter.is_empty() {
        return None;
    }
    line.split_once(delimiter)
        .map(|(term, definition)| (term.trim(), definition.trim()))
}

/// Run the fallback chain.
pub fn split_fallback(line: &str) -> Option<(&str, &str)> {
    FALLBACKS.iter().find_map(|strategy| strategy(line))
}

/// Strict shape check: one delimiter, no stray delimiter characters on
/// either side, and text on both sides.
pub fn split_strict<'a>(line: &'a str, delimiter: &str) -> Option<(&'a str, &'a str)> {
    if delimiter.is_empty() {
        return None;
    }
    let (term, definition) = line.split_once(delimiter)?;
    let stray = |side: &str| side.contains(|c: char| delimiter.contains(c));
    if stray(term) || stray(definition) {
        return None;
    }
    non_empty((term, definition))
}

fn non_empty<'a>((term, definition): (&'a str, &'a str)) -> Option<(&'a str, &'a str)> {
    let (term, definition) = (term.trim(), definition.trim());
    if term.is_empty() || definition.is_empty() {
        None
    } else {
        Some((term, definition))
    }
}

fn split_double_space(line: &str) -> Option<(&str, &str)> {
    line.split_once("  ").and_then(non_empty)
}

fn split_colon(line: &str) -> Option<(&str, &str)> {
    line.split_once(':').and_then(non_empty)
}

fn split_whitespace(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();
    let idx = trimmed.find(char::is_whitespace)?;
    non_empty((&trimmed[..idx], &trimmed[idx..]))
}
