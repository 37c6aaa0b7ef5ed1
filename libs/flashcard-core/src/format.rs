//! Delimiter format detection.

use crate::types::Format;

/// Number of content lines inspected when no sample size is given.
pub const DEFAULT_SAMPLE_LINES: usize = 20;

/// Names of every supported format.
pub fn supported_formats() -> Vec<&'static str> {
    Format::ALL.iter().map(Format::as_str).collect()
}

/// Detect the format of `sample` using the default sample size.
pub fn detect_format(sample: &str) -> Option<Format> {
    detect_format_with(sample, DEFAULT_SAMPLE_LINES)
}

/// Detect the format of `sample` by inspecting up to `sample_lines`
/// content lines (blank lines and comments are not counted).
///
/// Picks the format whose delimiter cleanly splits the most sampled lines.
/// Ties go to the earlier entry of [`Format::ALL`]. Returns `None` when no
/// delimiter splits any line.
pub fn detect_format_with(sample: &str, sample_lines: usize) -> Option<Format> {
    let lines: Vec<&str> = sample
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .take(sample_lines)
        .collect();

    let mut best: Option<(Format, usize)> = None;
    for format in Format::ALL {
        let hits = lines
            .iter()
            .filter(|line| splits_cleanly(line, format.delimiter()))
            .count();
        // Strictly greater keeps the earlier format on ties.
        if hits > 0 && best.map_or(true, |(_, top)| hits > top) {
            best = Some((format, hits));
        }
    }

    match best {
        Some((format, hits)) => {
            tracing::debug!(format = format.as_str(), hits, sampled = lines.len(), "detected format");
            Some(format)
        }
        None => {
            tracing::debug!(sampled = lines.len(), "no delimiter format detected");
            None
        }
    }
}

fn splits_cleanly(line: &str, delimiter: &str) -> bool {
    match line.split_once(delimiter) {
        Some((term, definition)) => !term.trim().is_empty() && !definition.trim().is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detect_tsv() {
        let content = "apple\tred fruit\nbanana\tyellow fruit";
        assert_eq!(detect_format(content), Some(Format::Tsv));
    }

    #[test]
    fn detect_csv() {
        let content = "apple,red fruit\nbanana,yellow fruit";
        assert_eq!(detect_format(content), Some(Format::Csv));
    }

    #[test]
    fn detect_semicolon() {
        let content = "apple;red fruit\nbanana;yellow fruit";
        assert_eq!(detect_format(content), Some(Format::Semicolon));
    }

    #[test]
    fn detect_double_hash() {
        let content = "apple##red fruit\nbanana##yellow fruit";
        assert_eq!(detect_format(content), Some(Format::DoubleHash));
    }

    #[test]
    fn detect_pipe() {
        let content = "apple|red fruit\nbanana|yellow fruit";
        assert_eq!(detect_format(content), Some(Format::Pipe));
    }

    #[test]
    fn majority_wins() {
        let content = "a;b\nc;d\ne,f";
        assert_eq!(detect_format(content), Some(Format::Semicolon));
    }

    #[test]
    fn tie_goes_to_precedence() {
        // One line splits on comma, one on semicolon.
        let content = "a;b\nc,d";
        assert_eq!(detect_format(content), Some(Format::Csv));
        let content = "a|b\nc\td";
        assert_eq!(detect_format(content), Some(Format::Tsv));
    }

    #[test]
    fn comments_and_blanks_are_not_sampled() {
        let content = "# a,b\n\n# c,d\napple|red\nbanana|yellow";
        assert_eq!(detect_format(content), Some(Format::Pipe));
    }

    #[test]
    fn sample_size_limits_inspection() {
        let content = "a;b\nc,d\ne,f\ng,h";
        assert_eq!(detect_format_with(content, 1), Some(Format::Semicolon));
        assert_eq!(detect_format_with(content, 4), Some(Format::Csv));
    }

    #[test]
    fn nothing_detected() {
        assert_eq!(detect_format("just words\nmore words"), None);
        assert_eq!(detect_format(""), None);
    }

    #[test]
    fn empty_side_does_not_count() {
        assert_eq!(detect_format("apple,\n,red"), None);
    }

    #[test]
    fn edge_tab_does_not_count_for_tsv() {
        assert_eq!(detect_format("\tno term\napple,red"), Some(Format::Csv));
    }

    #[test]
    fn supported_format_names() {
        assert_eq!(
            supported_formats(),
            vec!["tsv", "csv", "semicolon", "double_hash", "pipe"]
        );
    }
}
