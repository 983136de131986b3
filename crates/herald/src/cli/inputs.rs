//! Action inputs
//!
//! Every input can be passed as a flag or through the `INPUT_<NAME>`
//! variable the Actions runner sets. Empty values count as unset, so a
//! workflow that leaves an input blank keeps the configured value.

use clap::Args;

use herald_core::config::{ExcludeSetting, NotesConfig, ReleaseConfig};
use herald_core::{ConfigError, SortOrder};

/// Inputs that shape the release notes
#[derive(Debug, Clone, Default, Args)]
pub struct NotesInputs {
    /// Exclude commits: `true` for the built-in pattern, or a regular expression
    #[arg(long, env = "INPUT_EXCLUDE", value_name = "PATTERN")]
    pub exclude: Option<String>,

    /// Release body template ({commits}, {range})
    #[arg(long, env = "INPUT_TEMPLATE")]
    pub template: Option<String>,

    /// Commit line template ({hash}, {date}, {title}, {url}, {author})
    #[arg(long, env = "INPUT_COMMIT-TEMPLATE")]
    pub commit_template: Option<String>,

    /// git date format, a preset name or a strftime pattern
    #[arg(long, env = "INPUT_DATE-FORMAT")]
    pub date_format: Option<String>,

    /// Commit order: asc or desc
    #[arg(long, env = "INPUT_SORT")]
    pub sort: Option<String>,

    /// Legacy ordering switch, `false` means ascending
    #[arg(long, env = "INPUT_REVERSE-SORT", num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub reverse_sort: Option<String>,

    /// Publish nothing when every commit is excluded
    #[arg(long, env = "INPUT_SKIP-ON-EMPTY", num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub skip_on_empty: Option<String>,

    /// Resolve commit authors through the GitHub API
    #[arg(long, env = "INPUT_INCLUDE-AUTHORS", num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub include_authors: Option<String>,
}

impl NotesInputs {
    /// Override `notes` with every input that was given
    pub fn apply(&self, notes: &mut NotesConfig) -> Result<(), ConfigError> {
        if let Some(exclude) = given(&self.exclude) {
            notes.exclude = ExcludeSetting::parse(exclude);
        }
        if let Some(template) = given(&self.template) {
            notes.release_template = template.to_string();
        }
        if let Some(template) = given(&self.commit_template) {
            notes.commit_template = template.to_string();
        }
        if let Some(format) = given(&self.date_format) {
            notes.date_format = format.to_string();
        }
        if let Some(order) = self.sort_order()? {
            notes.sort = order;
        }
        if let Some(skip) = parse_flag("skip-on-empty", &self.skip_on_empty)? {
            notes.skip_on_empty = skip;
        }
        if let Some(authors) = parse_flag("include-authors", &self.include_authors)? {
            notes.include_authors = Some(authors);
        }
        Ok(())
    }

    /// `sort` when given, else the legacy `reverse-sort` switch
    fn sort_order(&self) -> Result<Option<SortOrder>, ConfigError> {
        if let Some(sort) = given(&self.sort) {
            return sort
                .parse::<SortOrder>()
                .map(Some)
                .map_err(|message| ConfigError::InvalidValue {
                    field: "sort".to_string(),
                    message,
                });
        }

        let reverse = parse_flag("reverse-sort", &self.reverse_sort)?;
        Ok(reverse.map(|reverse| if reverse { SortOrder::Desc } else { SortOrder::Asc }))
    }
}

/// Inputs for publishing the release
#[derive(Debug, Clone, Default, Args)]
pub struct ReleaseInputs {
    /// GitHub token used for the API
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Tag to release (defaults to the newest tag)
    #[arg(long, env = "INPUT_TAG")]
    pub tag: Option<String>,

    /// Release title template ({tag})
    #[arg(long, env = "INPUT_TITLE")]
    pub title: Option<String>,

    /// Create the release as a draft
    #[arg(long, env = "INPUT_DRAFT", num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub draft: Option<String>,

    /// Mark the release as a prerelease
    #[arg(long, env = "INPUT_PRERELEASE", num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub prerelease: Option<String>,
}

impl ReleaseInputs {
    /// Override `release` with every input that was given
    pub fn apply(&self, release: &mut ReleaseConfig) -> Result<(), ConfigError> {
        if let Some(title) = given(&self.title) {
            release.title = title.to_string();
        }
        if let Some(draft) = parse_flag("draft", &self.draft)? {
            release.draft = draft;
        }
        if let Some(prerelease) = parse_flag("prerelease", &self.prerelease)? {
            release.prerelease = prerelease;
        }
        Ok(())
    }

    /// The token, if a non-empty one was given
    pub fn token(&self) -> Option<&str> {
        given(&self.token)
    }

    /// The requested tag, if any
    pub fn tag(&self) -> Option<&str> {
        given(&self.tag)
    }
}

fn given(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn parse_flag(field: &str, value: &Option<String>) -> Result<Option<bool>, ConfigError> {
    let Some(raw) = given(value) else {
        return Ok(None);
    };

    match raw.trim() {
        v if v.eq_ignore_ascii_case("true") => Ok(Some(true)),
        v if v.eq_ignore_ascii_case("false") => Ok(Some(false)),
        other => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: format!("expected true or false, got '{}'", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_empty_inputs_keep_config() {
        let inputs = NotesInputs {
            exclude: some(""),
            template: some("  "),
            sort: some(""),
            ..Default::default()
        };
        let mut notes = NotesConfig {
            exclude: ExcludeSetting::Preset,
            ..Default::default()
        };

        inputs.apply(&mut notes).unwrap();
        assert_eq!(notes.exclude, ExcludeSetting::Preset);
        assert_eq!(notes.release_template, NotesConfig::default().release_template);
        assert_eq!(notes.sort, SortOrder::Desc);
    }

    #[test]
    fn test_inputs_override_config() {
        let inputs = NotesInputs {
            exclude: some("true"),
            template: some("{commits}"),
            commit_template: some("* {title}"),
            date_format: some("%Y"),
            skip_on_empty: some("TRUE"),
            include_authors: some("false"),
            ..Default::default()
        };
        let mut notes = NotesConfig::default();

        inputs.apply(&mut notes).unwrap();
        assert_eq!(notes.exclude, ExcludeSetting::Preset);
        assert_eq!(notes.release_template, "{commits}");
        assert_eq!(notes.commit_template, "* {title}");
        assert_eq!(notes.date_format, "%Y");
        assert!(notes.skip_on_empty);
        assert_eq!(notes.include_authors, Some(false));
    }

    #[test]
    fn test_reverse_sort_legacy_mapping() {
        let mut notes = NotesConfig::default();
        let inputs = NotesInputs {
            reverse_sort: some("false"),
            ..Default::default()
        };
        inputs.apply(&mut notes).unwrap();
        assert_eq!(notes.sort, SortOrder::Asc);

        let inputs = NotesInputs {
            reverse_sort: some("true"),
            ..Default::default()
        };
        inputs.apply(&mut notes).unwrap();
        assert_eq!(notes.sort, SortOrder::Desc);
    }

    #[test]
    fn test_sort_wins_over_reverse_sort() {
        let mut notes = NotesConfig::default();
        let inputs = NotesInputs {
            sort: some("asc"),
            reverse_sort: some("true"),
            ..Default::default()
        };
        inputs.apply(&mut notes).unwrap();
        assert_eq!(notes.sort, SortOrder::Asc);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut notes = NotesConfig::default();
        let inputs = NotesInputs {
            sort: some("sideways"),
            ..Default::default()
        };
        assert!(matches!(
            inputs.apply(&mut notes),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "sort"
        ));

        let mut release = ReleaseConfig::default();
        let inputs = ReleaseInputs {
            draft: some("yes"),
            ..Default::default()
        };
        assert!(matches!(
            inputs.apply(&mut release),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "draft"
        ));
    }

    #[test]
    fn test_release_inputs() {
        let inputs = ReleaseInputs {
            token: some(""),
            tag: some("v2.0.0"),
            title: some("Release {tag}"),
            draft: some("true"),
            prerelease: None,
        };
        let mut release = ReleaseConfig::default();

        inputs.apply(&mut release).unwrap();
        assert_eq!(release.title_for("v2.0.0"), "Release v2.0.0");
        assert!(release.draft);
        assert!(!release.prerelease);
        assert_eq!(inputs.token(), None);
        assert_eq!(inputs.tag(), Some("v2.0.0"));
    }
}
