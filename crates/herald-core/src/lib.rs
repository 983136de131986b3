//! Herald Core - Core library for tag-driven release automation
//!
//! This crate provides the error types, configuration, and GitHub Actions
//! runtime plumbing shared by the Herald crates.

pub mod config;
pub mod context;
pub mod error;
pub mod outputs;
pub mod types;

pub use context::{GitHubContext, Repository};
pub use error::{ConfigError, GitError, HeraldError, NotesError, Result};
pub use outputs::ActionOutputs;
pub use types::SortOrder;
