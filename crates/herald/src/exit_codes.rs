//! Exit codes for the CLI

use herald_core::{ConfigError, GitError, HeraldError, NotesError};
use herald_github::GitHubError;

/// General error
pub const ERROR: i32 = 1;

/// Configuration or input error
pub const CONFIG_ERROR: i32 = 2;

/// Git error
pub const GIT_ERROR: i32 = 3;

/// GitHub API error
pub const API_ERROR: i32 = 4;

/// Pick the exit code for a failed run
pub fn for_error(err: &anyhow::Error) -> i32 {
    if let Some(err) = err.downcast_ref::<HeraldError>() {
        return match err {
            HeraldError::Config(_) => CONFIG_ERROR,
            HeraldError::Git(_) => GIT_ERROR,
            HeraldError::Notes(NotesError::InvalidExclude { .. }) => CONFIG_ERROR,
            HeraldError::Notes(NotesError::AuthorLookup { .. }) => API_ERROR,
            HeraldError::Io(_) => ERROR,
        };
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return CONFIG_ERROR;
    }
    if err.downcast_ref::<GitError>().is_some() {
        return GIT_ERROR;
    }
    match err.downcast_ref::<GitHubError>() {
        Some(GitHubError::ConfigurationError(_)) => CONFIG_ERROR,
        Some(_) => API_ERROR,
        None => ERROR,
    }
}
