//! Release notes types

use serde::{Deserialize, Serialize};

/// Number of hash characters shown in release notes
pub const SHORT_HASH_LEN: usize = 8;

/// One commit of the release range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Full commit hash
    pub hash: String,
    /// Date as formatted by git
    pub date: String,
    /// First line of the commit message
    pub title: String,
    /// `@login` of the author, once resolved
    pub author: Option<String>,
}

impl CommitRecord {
    /// Create a record without author information
    pub fn new(
        hash: impl Into<String>,
        date: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            date: date.into(),
            title: title.into(),
            author: None,
        }
    }

    /// Set the author from a GitHub login
    pub fn set_author(&mut self, login: &str) {
        self.author = Some(format!("@{}", login));
    }

    /// First eight characters of the hash
    pub fn short_hash(&self) -> &str {
        match self.hash.char_indices().nth(SHORT_HASH_LEN) {
            Some((idx, _)) => &self.hash[..idx],
            None => &self.hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hash() {
        let commit = CommitRecord::new("0123456789abcdef", "2024-01-01", "Add thing");
        assert_eq!(commit.short_hash(), "01234567");
    }

    #[test]
    fn test_short_hash_of_short_input() {
        let commit = CommitRecord::new("abc", "", "");
        assert_eq!(commit.short_hash(), "abc");
    }

    #[test]
    fn test_set_author() {
        let mut commit = CommitRecord::new("abc", "", "");
        commit.set_author("octocat");
        assert_eq!(commit.author.as_deref(), Some("@octocat"));
    }
}
