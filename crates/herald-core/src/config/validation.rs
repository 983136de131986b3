//! Configuration validation

use regex::Regex;
use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::{Config, ExcludeSetting, NotesConfig, ReleaseConfig};

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_notes(&config.notes)?;
    validate_release(&config.release)?;
    debug!("configuration validation passed");
    Ok(())
}

/// Validate the release notes section
pub fn validate_notes(notes: &NotesConfig) -> Result<()> {
    if let ExcludeSetting::Pattern(pattern) = &notes.exclude {
        if let Err(e) = Regex::new(pattern) {
            return Err(ConfigError::InvalidValue {
                field: "notes.exclude".to_string(),
                message: e.to_string(),
            }
            .into());
        }
    }

    if notes.commit_template.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "notes.commit_template".to_string(),
            message: "template cannot be empty".to_string(),
        }
        .into());
    }

    if notes.release_template.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "notes.release_template".to_string(),
            message: "template cannot be empty".to_string(),
        }
        .into());
    }

    if notes.date_format.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "notes.date_format".to_string(),
            message: "date format cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_release(release: &ReleaseConfig) -> Result<()> {
    if release.title.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "release.title".to_string(),
            message: "title cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_invalid_exclude() {
        let mut config = Config::default();
        config.notes.exclude = ExcludeSetting::Pattern("[unclosed".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_commit_template() {
        let mut config = Config::default();
        config.notes.commit_template = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_blank_title() {
        let mut config = Config::default();
        config.release.title = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }
}
