//! Git types

use serde::Serialize;

/// How git renders the date field of a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFormat {
    /// A named `--date` preset such as `short` or `iso`
    Preset(String),
    /// A strftime-style pattern, passed as `--date=format:<pattern>`
    Custom(String),
}

impl DateFormat {
    /// Interpret a user-supplied format: anything containing `%` is a pattern
    pub fn parse(format: &str) -> Self {
        if format.contains('%') {
            Self::Custom(format.to_string())
        } else {
            Self::Preset(format.trim().to_string())
        }
    }

    /// The `--date` argument for `git log`
    pub fn to_arg(&self) -> String {
        match self {
            Self::Preset(name) => format!("--date={}", name),
            Self::Custom(pattern) => format!("--date=format:{}", pattern),
        }
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::Preset("short".to_string())
    }
}

/// The span of history a release covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseRange {
    /// Tag being released
    pub tag: String,
    /// Previous tag, or `None` when the range starts at the root commit
    pub previous_tag: Option<String>,
    /// `<from>..<to>` expression passed to `git log`
    pub range: String,
}
