//! Commit author resolution

use async_trait::async_trait;
use herald_core::error::Result;
use tracing::{debug, instrument};

use crate::types::CommitRecord;

/// Resolves the GitHub login that authored a commit
#[async_trait]
pub trait AuthorLookup: Send + Sync {
    /// Login of the author of the commit with the given full hash
    async fn login_for(&self, hash: &str) -> Result<String>;
}

/// Attach authors to `commits`, one lookup at a time in display order.
///
/// The first failed lookup aborts the whole enrichment.
#[instrument(skip_all, fields(count = commits.len()))]
pub async fn enrich_authors(commits: &mut [CommitRecord], lookup: &dyn AuthorLookup) -> Result<()> {
    for commit in commits.iter_mut() {
        let login = lookup.login_for(&commit.hash).await?;
        debug!(hash = %commit.short_hash(), login = %login, "resolved commit author");
        commit.set_author(&login);
    }
    Ok(())
}
