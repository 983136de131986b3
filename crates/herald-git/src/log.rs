//! Commit history queries

use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::DateFormat;

/// Separates the fields of one `git log` record.
///
/// ASCII unit separator; commit subjects are assumed never to contain it.
pub const FIELD_DELIMITER: char = '\u{1f}';

/// Pretty format producing `<hash>␟<date>␟<subject>` per commit
const LOG_FORMAT: &str = "--format=%H%x1f%ad%x1f%s";

/// Parameters for a single history query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    /// `<from>..<to>` range expression
    pub range: String,
    /// Rendering of the date field
    pub date_format: DateFormat,
    /// Oldest commit first instead of git's newest-first order
    pub reverse: bool,
}

impl LogQuery {
    /// Query a range with default formatting, newest first
    pub fn new(range: impl Into<String>) -> Self {
        Self {
            range: range.into(),
            date_format: DateFormat::default(),
            reverse: false,
        }
    }

    /// Set the date format
    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    /// Request oldest-first order
    pub fn reversed(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Arguments passed to git
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "log".to_string(),
            LOG_FORMAT.to_string(),
            self.date_format.to_arg(),
        ];
        if self.reverse {
            args.push("--reverse".to_string());
        }
        args.push(self.range.clone());
        args.push("--".to_string());
        args
    }
}

/// Source of raw history records
pub trait HistorySource {
    /// Run the query once and return its non-blank output lines, in order
    fn history(&self, query: &LogQuery) -> Result<Vec<String>>;
}

impl HistorySource for GitRepo {
    #[instrument(skip(self), fields(range = %query.range, reverse = query.reverse))]
    fn history(&self, query: &LogQuery) -> Result<Vec<String>> {
        let stdout = self.run(query.args())?;
        let lines: Vec<String> = stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();

        debug!(count = lines.len(), "queried commit history");
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestRepo;
    use herald_core::error::GitError;

    fn fields(line: &str) -> Vec<&str> {
        line.split(FIELD_DELIMITER).collect()
    }

    #[test]
    fn test_query_args() {
        let query = LogQuery::new("v1.0.0..v1.1.0")
            .with_date_format(DateFormat::parse("%Y"))
            .reversed(true);

        assert_eq!(
            query.args(),
            vec![
                "log",
                "--format=%H%x1f%ad%x1f%s",
                "--date=format:%Y",
                "--reverse",
                "v1.0.0..v1.1.0",
                "--",
            ]
        );
    }

    #[test]
    fn test_history_newest_first() {
        let mut fixture = TestRepo::new();
        fixture.commit("Initial commit");
        fixture.tag("v1.0.0");
        let first = fixture.commit("Add parser");
        let second = fixture.commit("Fix parser");

        let repo = GitRepo::open(fixture.path()).unwrap();
        let lines = repo.history(&LogQuery::new("v1.0.0..HEAD")).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(fields(&lines[0]), vec![second.as_str(), "2023-11-15", "Fix parser"]);
        assert_eq!(fields(&lines[1])[0], first);
        assert_eq!(fields(&lines[1])[2], "Add parser");
    }

    #[test]
    fn test_history_reversed_with_custom_date() {
        let mut fixture = TestRepo::new();
        fixture.commit("Initial commit");
        fixture.tag("v1.0.0");
        fixture.commit("Add parser");
        fixture.commit("Fix parser");

        let repo = GitRepo::open(fixture.path()).unwrap();
        let query = LogQuery::new("v1.0.0..HEAD")
            .with_date_format(DateFormat::parse("%Y"))
            .reversed(true);
        let lines = repo.history(&query).unwrap();

        let titles: Vec<_> = lines.iter().map(|l| fields(l)[2]).collect();
        assert_eq!(titles, vec!["Add parser", "Fix parser"]);
        assert_eq!(fields(&lines[0])[1], "2023");
    }

    #[test]
    fn test_history_empty_range() {
        let mut fixture = TestRepo::new();
        fixture.commit("Initial commit");
        fixture.tag("v1.0.0");

        let repo = GitRepo::open(fixture.path()).unwrap();
        let lines = repo.history(&LogQuery::new("v1.0.0..v1.0.0")).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_history_keeps_non_utf8_titles() {
        let mut fixture = TestRepo::new();
        fixture.commit("Initial commit");
        fixture.tag("v1.0.0");
        fixture.commit_bytes(b"Caf\xe9 menu");
        fixture.commit("Fix parser");

        let repo = GitRepo::open(fixture.path()).unwrap();
        let lines = repo.history(&LogQuery::new("v1.0.0..HEAD")).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(fields(&lines[0])[2], "Fix parser");
        assert_eq!(fields(&lines[1])[2], "Caf\u{fffd} menu");
    }

    #[test]
    fn test_history_bad_range_is_fatal() {
        let mut fixture = TestRepo::new();
        fixture.commit("Initial commit");

        let repo = GitRepo::open(fixture.path()).unwrap();
        let result = repo.history(&LogQuery::new("nope..HEAD"));
        assert!(matches!(result, Err(GitError::CommandFailed { .. })));
    }
}
