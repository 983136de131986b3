//! Tag operations

use tracing::{debug, info, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::ReleaseRange;
use herald_core::error::GitError;

impl GitRepo {
    /// Get all tags, most recently created first
    #[instrument(skip(self))]
    pub fn tags_by_creation(&self) -> Result<Vec<String>> {
        let stdout = self.run(["tag", "-l", "--sort=-creatordate"])?;
        let tags: Vec<String> = stdout
            .lines()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        debug!(count = tags.len(), "listed tags");
        Ok(tags)
    }

    /// Get the first root commit reachable from HEAD
    pub fn root_commit(&self) -> Result<String> {
        let stdout = self.run(["rev-list", "--max-parents=0", "HEAD"])?;
        stdout
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(str::to_string)
            .ok_or(GitError::NoRootCommit)
    }

    /// Resolve the history range covered by releasing `tag`
    ///
    /// `tags` must be ordered newest first, as returned by
    /// [`GitRepo::tags_by_creation`].
    #[instrument(skip(self, tags))]
    pub fn release_range(&self, tags: &[String], tag: &str) -> Result<ReleaseRange> {
        let previous = previous_tag(tags, tag).map(str::to_string);

        let from = match &previous {
            Some(previous) => previous.clone(),
            None => self.root_commit()?,
        };

        let range = ReleaseRange {
            tag: tag.to_string(),
            previous_tag: previous,
            range: format!("{}..{}", from, tag),
        };
        info!(range = %range.range, "computed release range");
        Ok(range)
    }
}

/// The tag released before `tag` in a newest-first tag list
///
/// Falls back to the newest tag when `tag` is not listed.
pub fn previous_tag<'a>(tags: &'a [String], tag: &str) -> Option<&'a str> {
    match tags.iter().position(|t| t == tag) {
        Some(pos) => tags.get(pos + 1).map(String::as_str),
        None => tags.first().map(String::as_str),
    }
}
