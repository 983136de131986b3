//! Parsing of `git log` records

use herald_git::FIELD_DELIMITER;
use tracing::debug;

use crate::types::CommitRecord;

/// Parse one `<hash>␟<date>␟<title>` line.
///
/// The title is the last field and keeps any further delimiter characters.
/// Lines with missing fields produce empty values rather than an error.
pub fn parse_line(line: &str) -> CommitRecord {
    let mut fields = line.splitn(3, FIELD_DELIMITER);
    let hash = fields.next().unwrap_or_default().trim();
    let date = fields.next();
    let title = fields.next();

    if date.is_none() || title.is_none() {
        debug!(line, "history line is missing fields");
    }

    CommitRecord::new(hash, date.unwrap_or_default(), title.unwrap_or_default())
}

/// Parse history lines in order, skipping blank ones
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Vec<CommitRecord> {
    lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let commit = parse_line("0123456789abcdef\u{1f}2024-03-01\u{1f}Fix padding issue");
        assert_eq!(commit.hash, "0123456789abcdef");
        assert_eq!(commit.date, "2024-03-01");
        assert_eq!(commit.title, "Fix padding issue");
        assert!(commit.author.is_none());
    }

    #[test]
    fn test_title_keeps_extra_delimiters() {
        let commit = parse_line("abcdef0123\u{1f}2024-03-01\u{1f}odd\u{1f}title");
        assert_eq!(commit.title, "odd\u{1f}title");
    }

    #[test]
    fn test_missing_fields() {
        let commit = parse_line("abcdef0123");
        assert_eq!(commit.hash, "abcdef0123");
        assert_eq!(commit.date, "");
        assert_eq!(commit.title, "");
    }

    #[test]
    fn test_parse_lines_skips_blank() {
        let lines = vec![
            "a1\u{1f}d\u{1f}First".to_string(),
            "   ".to_string(),
            "b2\u{1f}d\u{1f}Second".to_string(),
        ];
        let commits = parse_lines(&lines);
        let titles: Vec<_> = commits.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }
}
