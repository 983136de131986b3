//! Git repository operations

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, instrument};

use herald_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// A repository driven through the `git` executable
#[derive(Debug, Clone)]
pub struct GitRepo {
    git: PathBuf,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository whose work tree is at `path`
    #[instrument(fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "opening git repository");
        let git = locate_git()?;
        let repo = Self {
            git,
            path: path.to_path_buf(),
        };

        repo.run(["rev-parse", "--git-dir"])
            .map_err(|_| GitError::NotARepository(path.to_path_buf()))?;

        Ok(repo)
    }

    /// Discover the repository containing `start_path`
    #[instrument(fields(start_path = %start_path.display()))]
    pub fn discover(start_path: &Path) -> Result<Self> {
        info!(start_path = %start_path.display(), "discovering git repository");
        let git = locate_git()?;
        let start = Self {
            git,
            path: start_path.to_path_buf(),
        };

        let toplevel = start
            .run(["rev-parse", "--show-toplevel"])
            .map_err(|_| GitError::NotARepository(start_path.to_path_buf()))?;

        Ok(Self {
            git: start.git,
            path: PathBuf::from(toplevel.trim()),
        })
    }

    /// Get the repository path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run a git subcommand in the repository and return its stdout
    pub(crate) fn run<I, S>(&self, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<_> = args.into_iter().map(|a| a.as_ref().to_os_string()).collect();
        let command = format!(
            "git {}",
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let start = std::time::Instant::now();
        let output = Command::new(&self.git)
            .args(&args)
            .current_dir(&self.path)
            .output()
            .map_err(|source| GitError::Spawn {
                command: command.clone(),
                source,
            })?;

        debug!(
            command = %command,
            status = %output.status,
            duration_ms = start.elapsed().as_millis(),
            "git command finished"
        );

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // Commit messages carry arbitrary bytes
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn locate_git() -> Result<PathBuf> {
    which::which("git").map_err(|_| GitError::GitNotFound)
}
