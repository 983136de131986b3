//! Release notes generation

use herald_core::config::{NotesConfig, MAINTENANCE_PLACEHOLDER};
use herald_core::error::Result;
use herald_git::{DateFormat, HistorySource, LogQuery};
use tracing::{debug, info, instrument, warn};

use crate::authors::{enrich_authors, AuthorLookup};
use crate::filter::CommitFilter;
use crate::parser::parse_lines;
use crate::template::{commit_url, compare_link, render};
use crate::types::CommitRecord;

/// Release notes generator
pub struct ReleaseNotesGenerator {
    config: NotesConfig,
    repo_url: String,
    authors: Option<Box<dyn AuthorLookup>>,
}

impl ReleaseNotesGenerator {
    /// Create a generator that links commits under `repo_url`
    pub fn new(config: NotesConfig, repo_url: impl Into<String>) -> Self {
        Self {
            config,
            repo_url: repo_url.into().trim_end_matches('/').to_string(),
            authors: None,
        }
    }

    /// Use an author lookup for `{author}` enrichment
    pub fn with_author_lookup<L: AuthorLookup + 'static>(mut self, lookup: L) -> Self {
        self.authors = Some(Box::new(lookup));
        self
    }

    /// The history query for `range`
    pub fn query(&self, range: &str) -> LogQuery {
        LogQuery::new(range)
            .with_date_format(DateFormat::parse(&self.config.date_format))
            .reversed(self.config.sort.is_ascending())
    }

    /// Collect the commits of `range` that survive filtering, in display order
    #[instrument(skip(self, history))]
    pub async fn commits(
        &self,
        history: &dyn HistorySource,
        range: &str,
    ) -> Result<Vec<CommitRecord>> {
        let filter = CommitFilter::from_setting(&self.config.exclude)?;

        let lines = history.history(&self.query(range))?;
        let mut commits = filter.apply(parse_lines(&lines));

        if self.config.wants_authors() {
            match &self.authors {
                Some(lookup) => enrich_authors(&mut commits, lookup.as_ref()).await?,
                None => warn!("author enrichment requested but no lookup is configured"),
            }
        }

        debug!(count = commits.len(), "collected commits");
        Ok(commits)
    }

    /// Generate the release body for `range`.
    ///
    /// Returns `None` when no commit survives filtering and `skip_on_empty`
    /// is set.
    pub async fn generate(
        &self,
        history: &dyn HistorySource,
        range: &str,
    ) -> Result<Option<String>> {
        let commits = self.commits(history, range).await?;
        let body = self.render(&commits, range);

        match &body {
            Some(body) => info!(range, commits = commits.len(), len = body.len(), "generated release notes"),
            None => info!(range, "no commits to release"),
        }
        Ok(body)
    }

    /// Render already collected commits into a release body
    pub fn render(&self, commits: &[CommitRecord], range: &str) -> Option<String> {
        let block = if commits.is_empty() {
            if self.config.skip_on_empty {
                return None;
            }
            MAINTENANCE_PLACEHOLDER.to_string()
        } else {
            commits
                .iter()
                .map(|commit| self.render_commit(commit))
                .collect::<Vec<_>>()
                .join("\n")
        };

        let link = compare_link(&self.repo_url, range);
        let body = render(&self.config.release_template, |name| match name {
            "commits" => Some(block.as_str()),
            "range" => Some(link.as_str()),
            _ => None,
        });
        Some(body)
    }

    /// Render one commit through the commit template
    pub fn render_commit(&self, commit: &CommitRecord) -> String {
        let short = commit.short_hash();
        let url = commit_url(&self.repo_url, short);

        render(&self.config.commit_template, |name| match name {
            "hash" => Some(short),
            "url" => Some(url.as_str()),
            "date" => Some(commit.date.as_str()),
            "author" => Some(commit.author.as_deref().unwrap_or_default()),
            "title" => Some(commit.title.as_str()),
            _ => None,
        })
    }
}
