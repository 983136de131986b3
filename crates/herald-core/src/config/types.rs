//! Configuration types

use serde::{Deserialize, Serialize};

use super::defaults::{
    DEFAULT_COMMIT_TEMPLATE, DEFAULT_DATE_FORMAT, DEFAULT_RELEASE_TEMPLATE, DEFAULT_RELEASE_TITLE,
};
use crate::types::SortOrder;

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Release notes rendering
    pub notes: NotesConfig,

    /// Release publication
    pub release: ReleaseConfig,
}

/// Release notes configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// Commit exclusion rule
    pub exclude: ExcludeSetting,

    /// Template for each commit line
    pub commit_template: String,

    /// Template for the release body
    pub release_template: String,

    /// git date format: a preset name or a `%` pattern
    pub date_format: String,

    /// Commit order
    pub sort: SortOrder,

    /// Produce nothing instead of a placeholder when no commits remain
    pub skip_on_empty: bool,

    /// Resolve commit authors through the API
    ///
    /// Defaults to whether the commit template uses `{author}`.
    pub include_authors: Option<bool>,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            exclude: ExcludeSetting::Off,
            commit_template: DEFAULT_COMMIT_TEMPLATE.to_string(),
            release_template: DEFAULT_RELEASE_TEMPLATE.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            sort: SortOrder::Desc,
            skip_on_empty: false,
            include_authors: None,
        }
    }
}

impl NotesConfig {
    /// Whether author enrichment should run
    pub fn wants_authors(&self) -> bool {
        self.include_authors
            .unwrap_or_else(|| self.commit_template.contains("{author}"))
    }
}

/// Release publication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Release title template, `{tag}` is replaced with the tag name
    pub title: String,

    /// Create the release as a draft
    pub draft: bool,

    /// Mark the release as a prerelease
    pub prerelease: bool,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_RELEASE_TITLE.to_string(),
            draft: false,
            prerelease: false,
        }
    }
}

impl ReleaseConfig {
    /// Render the release title for a tag
    pub fn title_for(&self, tag: &str) -> String {
        self.title.replace("{tag}", tag)
    }
}

/// How commits are excluded from the release notes
///
/// Accepts `false`/`""` (off), `true`/`"true"` (built-in preset) or any other
/// string as a regular expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawExclude", into = "RawExclude")]
pub enum ExcludeSetting {
    /// Keep every commit
    #[default]
    Off,
    /// Use the built-in maintenance pattern
    Preset,
    /// Use a custom regular expression
    Pattern(String),
}

impl ExcludeSetting {
    /// Interpret a raw input value
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "" | "false" => Self::Off,
            "true" => Self::Preset,
            _ => Self::Pattern(input.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawExclude {
    Flag(bool),
    Pattern(String),
}

impl From<RawExclude> for ExcludeSetting {
    fn from(raw: RawExclude) -> Self {
        match raw {
            RawExclude::Flag(true) => Self::Preset,
            RawExclude::Flag(false) => Self::Off,
            RawExclude::Pattern(p) => Self::parse(&p),
        }
    }
}

impl From<ExcludeSetting> for RawExclude {
    fn from(setting: ExcludeSetting) -> Self {
        match setting {
            ExcludeSetting::Off => Self::Flag(false),
            ExcludeSetting::Preset => Self::Flag(true),
            ExcludeSetting::Pattern(p) => Self::Pattern(p),
        }
    }
}
