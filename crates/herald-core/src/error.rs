//! Error types for Herald

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using HeraldError
pub type Result<T> = std::result::Result<T, HeraldError>;

/// Main error type for Herald operations
#[derive(Debug, Error)]
pub enum HeraldError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Release notes errors
    #[error(transparent)]
    Notes(#[from] NotesError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// Required environment variable is not set
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// The git executable could not be located
    #[error("git executable not found on PATH")]
    GitNotFound,

    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// The git process could not be started
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// git exited with a non-zero status
    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// No root commit could be resolved
    #[error("No root commit found in repository")]
    NoRootCommit,
}

/// Release notes errors
#[derive(Debug, Error)]
pub enum NotesError {
    /// The exclude pattern is not a valid regular expression
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExclude {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Resolving a commit author failed
    #[error("Failed to resolve author for commit {hash}: {reason}")]
    AuthorLookup { hash: String, reason: String },
}
