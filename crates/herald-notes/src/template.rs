//! Placeholder substitution
//!
//! Templates use `{name}` placeholders. Substitution is a single pass over the
//! template: substituted values are copied verbatim and never scanned again, so
//! a commit title containing `{date}` stays literal.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").expect("Invalid regex"));

/// Replace every known placeholder in `template`.
///
/// `lookup` returns the value for a placeholder name, or `None` to leave the
/// placeholder untouched.
pub fn render<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures<'_>| match lookup(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Markdown link to the compare view of `range`
pub fn compare_link(repo_url: &str, range: &str) -> String {
    format!("[`{}`]({}/compare/{})", range, repo_url, range)
}

/// Web URL of a commit
pub fn commit_url(repo_url: &str, hash: &str) -> String {
    format!("{}/commit/{}", repo_url, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<&'static str> {
        match name {
            "hash" => Some("1234abcd"),
            "title" => Some("Fix {date} handling"),
            "date" => Some("2024-01-01"),
            _ => None,
        }
    }

    #[test]
    fn test_render_replaces_all_occurrences() {
        assert_eq!(render("{hash} {hash}", lookup), "1234abcd 1234abcd");
    }

    #[test]
    fn test_render_does_not_rescan_values() {
        assert_eq!(
            render("- {title} ({date})", lookup),
            "- Fix {date} handling (2024-01-01)"
        );
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        assert_eq!(render("{hash} {unknown} {}", lookup), "1234abcd {unknown} {}");
    }

    #[test]
    fn test_compare_link() {
        assert_eq!(
            compare_link("https://github.com/acme/rocket", "v1.0.0..v1.1.0"),
            "[`v1.0.0..v1.1.0`](https://github.com/acme/rocket/compare/v1.0.0..v1.1.0)"
        );
    }

    #[test]
    fn test_commit_url() {
        assert_eq!(
            commit_url("https://github.com/acme/rocket", "1234abcd"),
            "https://github.com/acme/rocket/commit/1234abcd"
        );
    }
}
