//! Herald Git - Git operations for release automation
//!
//! This crate wraps the `git` executable: history queries over a commit
//! range, tag listing and release range resolution.

mod log;
mod repository;
mod tags;
pub mod types;

#[cfg(test)]
mod testing;

pub use log::{HistorySource, LogQuery, FIELD_DELIMITER};
pub use repository::{GitRepo, Result};
pub use tags::previous_tag;
pub use types::{DateFormat, ReleaseRange};
