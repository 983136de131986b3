//! Default configuration values

/// Default template for a single commit line
pub const DEFAULT_COMMIT_TEMPLATE: &str = "- {hash} {title}";

/// Default template for the whole release body
pub const DEFAULT_RELEASE_TEMPLATE: &str = "{commits}\n\n{range}";

/// Default git date format preset
pub const DEFAULT_DATE_FORMAT: &str = "short";

/// Default release title template
pub const DEFAULT_RELEASE_TITLE: &str = "{tag}";

/// Line emitted when no commit survives filtering
pub const MAINTENANCE_PLACEHOLDER: &str = "_Maintenance release_";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "herald.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "herald.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".herald.toml",
        ".herald.yaml",
    ]
}
