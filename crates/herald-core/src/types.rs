//! Core types for Herald

use serde::{Deserialize, Serialize};

/// Order in which commits appear in the release notes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest commit first
    Asc,
    /// Newest commit first, git's natural order
    #[default]
    Desc,
}

impl SortOrder {
    /// Returns the string representation of the sort order
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Whether the history query must be reversed
    pub fn is_ascending(&self) -> bool {
        matches!(self, Self::Asc)
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}
