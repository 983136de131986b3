//! Throwaway repositories for tests

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// A temporary repository with deterministic commit dates
pub(crate) struct TestRepo {
    dir: TempDir,
    clock: i64,
}

impl TestRepo {
    pub(crate) fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Self {
            dir,
            clock: 1_700_000_000,
        };
        repo.git(&["init", "--quiet"]);
        repo
    }

    pub(crate) fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create an empty commit one hour after the previous one
    pub(crate) fn commit(&mut self, message: &str) -> String {
        self.commit_with(&["-m", message])
    }

    /// Commit a message given as raw bytes, which need not be UTF-8
    pub(crate) fn commit_bytes(&mut self, message: &[u8]) -> String {
        let file = self.path().join(".git").join("TEST_COMMIT_MSG");
        std::fs::write(&file, message).unwrap();
        let file = file.to_string_lossy().into_owned();
        self.commit_with(&["-F", &file])
    }

    fn commit_with(&mut self, message_args: &[&str]) -> String {
        self.clock += 3600;
        let date = format!("{} +0000", self.clock);
        let status = Command::new("git")
            .args(["commit", "--quiet", "--allow-empty"])
            .args(message_args)
            .current_dir(self.path())
            .env("GIT_AUTHOR_NAME", "Test")
            .env("GIT_AUTHOR_EMAIL", "test@example.com")
            .env("GIT_COMMITTER_NAME", "Test")
            .env("GIT_COMMITTER_EMAIL", "test@example.com")
            .env("GIT_AUTHOR_DATE", &date)
            .env("GIT_COMMITTER_DATE", &date)
            .status()
            .unwrap();
        assert!(status.success());
        self.git(&["rev-parse", "HEAD"]).trim().to_string()
    }

    /// Create a lightweight tag at HEAD
    pub(crate) fn tag(&self, name: &str) {
        self.git(&["tag", name]);
    }

    pub(crate) fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .unwrap();
        assert!(output.status.success(), "git {:?} failed", args);
        String::from_utf8(output.stdout).unwrap()
    }
}
