//! Notes command

use clap::Args;
use serde::Serialize;
use tracing::info;

use herald_core::config::{load_config_or_default, validate_config};
use herald_core::{ConfigError, GitHubContext, Repository};
use herald_git::GitRepo;
use herald_github::{CommitAuthors, GitHubClient, GitHubConfig};
use herald_notes::ReleaseNotesGenerator;

use crate::cli::inputs::NotesInputs;
use crate::cli::output;
use crate::cli::{Cli, OutputFormat};

/// Print the release notes for a commit range
#[derive(Debug, Args)]
pub struct NotesCommand {
    /// Commit range such as `v1.0.0..v1.1.0` (defaults to the newest tag)
    pub range: Option<String>,

    /// Repository as owner/name, used for links
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// GitHub token, only needed to resolve commit authors
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(flatten)]
    pub notes: NotesInputs,
}

#[derive(Debug, Serialize)]
struct NotesReport<'a> {
    range: &'a str,
    body: Option<&'a str>,
}

impl NotesCommand {
    /// Execute the notes command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(range = ?self.range, "executing notes command");
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(self.run(cli))
    }

    async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        let (mut config, _) = load_config_or_default(&cwd)?;
        self.notes.apply(&mut config.notes)?;
        validate_config(&config)?;

        let mut context = GitHubContext::from_env();
        if let Some(slug) = self.repository.as_deref().filter(|s| !s.is_empty()) {
            let repository = Repository::parse(slug).ok_or_else(|| ConfigError::InvalidValue {
                field: "repository".to_string(),
                message: format!("expected owner/name, got '{}'", slug),
            })?;
            context = context.with_repository(repository);
        }
        let repo_url = context.repo_url()?;

        let repo = GitRepo::discover(&cwd)?;
        let range = match self.range.as_deref().filter(|r| !r.is_empty()) {
            Some(range) => range.to_string(),
            None => {
                let tags = repo.tags_by_creation()?;
                let Some(newest) = tags.first() else {
                    anyhow::bail!("No tags found. Pass a commit range explicitly.");
                };
                repo.release_range(&tags, newest)?.range
            }
        };

        let mut generator = ReleaseNotesGenerator::new(config.notes.clone(), repo_url);
        if config.notes.wants_authors() {
            if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) {
                let client = GitHubClient::new(GitHubConfig::new(context.api_url.clone(), token))?;
                let repository = context.repository()?.clone();
                generator = generator.with_author_lookup(CommitAuthors::new(client, repository));
            }
        }

        let body = generator.generate(&repo, &range).await?;

        match cli.format {
            OutputFormat::Json => {
                let report = NotesReport {
                    range: &range,
                    body: body.as_deref(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => match &body {
                Some(body) => println!("{}", body),
                None if !cli.quiet => output::info(&format!(
                    "Every commit in {} is excluded, nothing would be published",
                    output::tag_style().apply_to(&range)
                )),
                None => {}
            },
        }

        Ok(())
    }
}
