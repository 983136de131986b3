//! GitHub Actions step outputs

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::Result;

const DELIMITER: &str = "HERALD_EOF";

/// Collects step outputs and appends them to the `GITHUB_OUTPUT` file
#[derive(Debug, Default)]
pub struct ActionOutputs {
    path: Option<PathBuf>,
    entries: Vec<(String, String)>,
}

impl ActionOutputs {
    /// Outputs bound to the `GITHUB_OUTPUT` file, if the runner provides one
    pub fn from_env() -> Self {
        let path = std::env::var_os("GITHUB_OUTPUT")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Self::new(path)
    }

    /// Outputs bound to an explicit file
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            entries: Vec::new(),
        }
    }

    /// Record an output value, replacing an earlier one with the same key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a recorded value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render outputs in the `GITHUB_OUTPUT` file syntax
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            if value.contains('\n') {
                let delimiter = delimiter_for(value);
                out.push_str(&format!("{}<<{}\n{}\n{}\n", key, delimiter, value, delimiter));
            } else {
                out.push_str(&format!("{}={}\n", key, value));
            }
        }
        out
    }

    /// Append the outputs to the file; a no-op outside of Actions
    pub fn write(&self) -> Result<()> {
        let Some(path) = &self.path else {
            debug!(count = self.entries.len(), "GITHUB_OUTPUT not set, skipping outputs");
            return Ok(());
        };

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(self.render().as_bytes())?;
        info!(path = %path.display(), count = self.entries.len(), "wrote action outputs");
        Ok(())
    }
}

fn delimiter_for(value: &str) -> String {
    let mut delimiter = DELIMITER.to_string();
    let mut n = 0;
    while value.lines().any(|l| l == delimiter) {
        n += 1;
        delimiter = format!("{}_{}", DELIMITER, n);
    }
    delimiter
}
