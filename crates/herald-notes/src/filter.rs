//! Commit exclusion

use std::sync::LazyLock;

use herald_core::config::ExcludeSetting;
use herald_core::error::{NotesError, Result};
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::types::CommitRecord;

/// Built-in pattern for maintenance commits: version bumps, meta, docs, lint,
/// refactors, readme and dependency updates, and bare version titles.
pub const PRESET_PATTERN: &str =
    r"^bump |^meta|^document|^lint|^refactor|readme|dependencies|^v?\d+\.\d+\.\d+";

static PRESET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(PRESET_PATTERN)
        .case_insensitive(true)
        .build()
        .expect("Invalid regex")
});

/// Drops commits whose title matches an exclusion pattern
#[derive(Debug, Clone, Default)]
pub struct CommitFilter {
    regex: Option<Regex>,
}

impl CommitFilter {
    /// Build the filter for an exclusion setting
    pub fn from_setting(setting: &ExcludeSetting) -> Result<Self> {
        let regex = match setting {
            ExcludeSetting::Off => None,
            ExcludeSetting::Preset => Some(PRESET_REGEX.clone()),
            ExcludeSetting::Pattern(pattern) => {
                Some(Regex::new(pattern).map_err(|source| NotesError::InvalidExclude {
                    pattern: pattern.clone(),
                    source,
                })?)
            }
        };
        Ok(Self { regex })
    }

    /// Whether a commit is dropped
    pub fn is_excluded(&self, commit: &CommitRecord) -> bool {
        self.regex
            .as_ref()
            .is_some_and(|regex| regex.is_match(&commit.title))
    }

    /// Keep the commits that are not excluded, preserving order
    pub fn apply(&self, commits: Vec<CommitRecord>) -> Vec<CommitRecord> {
        if self.regex.is_none() {
            return commits;
        }

        let before = commits.len();
        let kept: Vec<_> = commits
            .into_iter()
            .filter(|commit| !self.is_excluded(commit))
            .collect();

        debug!(before, after = kept.len(), "applied exclude filter");
        kept
    }
}
