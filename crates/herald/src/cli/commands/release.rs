//! Release command

use std::path::Path;

use clap::Args;
use serde::Serialize;
use tracing::{info, instrument};

use herald_core::config::{load_config_or_default, validate_config};
use herald_core::{ActionOutputs, ConfigError, GitHubContext};
use herald_git::{GitRepo, ReleaseRange};
use herald_github::{CommitAuthors, CreateRelease, GitHubClient, GitHubConfig, Release};
use herald_notes::ReleaseNotesGenerator;

use crate::cli::inputs::{NotesInputs, ReleaseInputs};
use crate::cli::output;
use crate::cli::{Cli, OutputFormat};

/// Create a GitHub release for the pushed tag
#[derive(Debug, Args)]
pub struct ReleaseCommand {
    #[command(flatten)]
    pub release: ReleaseInputs,

    #[command(flatten)]
    pub notes: NotesInputs,

    /// Print the release instead of creating it
    #[arg(long)]
    pub dry_run: bool,
}

/// What a run did, for `--format json`
#[derive(Debug, Serialize)]
struct ReleaseReport<'a> {
    skipped: bool,
    dry_run: bool,
    tag: Option<&'a str>,
    range: Option<&'a str>,
    title: Option<&'a str>,
    body: Option<&'a str>,
    release: Option<&'a Release>,
}

impl ReleaseCommand {
    /// Execute the release command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            tag = ?self.release.tag(),
            dry_run = self.dry_run,
            "executing release command"
        );
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(self.run(cli))
    }

    async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        let context = GitHubContext::from_env();
        let mut outputs = ActionOutputs::from_env();
        self.release_in(cli, &cwd, &context, &mut outputs).await
    }

    /// Release the tag of the repository at `cwd`, reporting through `outputs`
    async fn release_in(
        &self,
        cli: &Cli,
        cwd: &Path,
        context: &GitHubContext,
        outputs: &mut ActionOutputs,
    ) -> anyhow::Result<()> {
        let (mut config, config_path) = load_config_or_default(cwd)?;
        if let Some(path) = &config_path {
            info!(path = %path.display(), "using configuration file");
        }
        self.notes.apply(&mut config.notes)?;
        self.release.apply(&mut config.release)?;
        validate_config(&config)?;

        let repository = context.repository()?.clone();
        let repo_url = context.repo_url()?;

        let client = self
            .release
            .token()
            .map(|token| GitHubClient::new(GitHubConfig::new(context.api_url.clone(), token)))
            .transpose()?;
        if client.is_none() && !self.dry_run {
            return Err(ConfigError::MissingEnv("INPUT_TOKEN".to_string()).into());
        }

        let repo = GitRepo::discover(cwd)?;

        let tags = repo.tags_by_creation()?;
        info!(?tags, "list of tags found");
        let Some(newest) = tags.first() else {
            info!("no tags found, nothing to be done");
            if !cli.quiet && cli.format == OutputFormat::Text {
                output::info("No tags found. There is nothing to be done here.");
            }
            return self.skip(cli, outputs, None);
        };

        let tag = select_tag(context.pushed_tag(), self.release.tag(), newest);
        if context.pushed_tag().is_some() {
            info!(%tag, "using pushed tag as reference");
        }

        let range = repo.release_range(&tags, &tag)?;

        let mut generator = ReleaseNotesGenerator::new(config.notes.clone(), repo_url);
        if config.notes.wants_authors() {
            if let Some(client) = &client {
                generator =
                    generator.with_author_lookup(CommitAuthors::new(client.clone(), repository.clone()));
            }
        }

        let Some(body) = generator.generate(&repo, &range.range).await? else {
            if !cli.quiet && cli.format == OutputFormat::Text {
                output::info(&format!(
                    "No commits left in {}, skipping the release",
                    output::tag_style().apply_to(&range.range)
                ));
            }
            return self.skip(cli, outputs, Some(&range));
        };

        let request = CreateRelease {
            tag_name: tag.clone(),
            name: config.release.title_for(&tag),
            body,
            draft: config.release.draft,
            prerelease: config.release.prerelease,
        };

        let release = match &client {
            Some(client) if !self.dry_run => Some(publish(client, context, &request).await?),
            _ => None,
        };

        outputs.set("skipped", "false");
        if let Some(release) = &release {
            outputs.set("id", release.id.to_string());
            outputs.set("html_url", release.html_url.as_str());
            outputs.set("upload_url", release.upload_url.as_str());
        }
        outputs.set("body", request.body.as_str());
        outputs.write()?;

        let report = ReleaseReport {
            skipped: false,
            dry_run: self.dry_run,
            tag: Some(&tag),
            range: Some(&range.range),
            title: Some(&request.name),
            body: Some(&request.body),
            release: release.as_ref(),
        };

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Text => print_text(cli, &request, &range, release.as_ref()),
        }

        Ok(())
    }

    fn skip(
        &self,
        cli: &Cli,
        outputs: &mut ActionOutputs,
        range: Option<&ReleaseRange>,
    ) -> anyhow::Result<()> {
        outputs.set("skipped", "true");
        outputs.write()?;

        if cli.format == OutputFormat::Json {
            let report = ReleaseReport {
                skipped: true,
                dry_run: self.dry_run,
                tag: range.map(|r| r.tag.as_str()),
                range: range.map(|r| r.range.as_str()),
                title: None,
                body: None,
                release: None,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Ok(())
    }
}

#[instrument(skip_all, fields(tag = %request.tag_name))]
async fn publish(
    client: &GitHubClient,
    context: &GitHubContext,
    request: &CreateRelease,
) -> anyhow::Result<Release> {
    let repository = context.repository()?;
    let release = client.create_release(repository, request).await?;
    info!(id = release.id, tag = %request.tag_name, "created release");
    Ok(release)
}

fn print_text(cli: &Cli, request: &CreateRelease, range: &ReleaseRange, release: Option<&Release>) {
    match release {
        Some(release) => {
            if cli.quiet {
                return;
            }
            output::success(&format!(
                "Created release {} for tag {}",
                release.id,
                output::tag_style().apply_to(&request.tag_name)
            ));
            println!("{}", output::key_value("range", &range.range));
            println!(
                "{}",
                output::key_value("url", &output::url_style().apply_to(&release.html_url).to_string())
            );
        }
        None => {
            if !cli.quiet {
                output::warning(&format!(
                    "Dry run: release '{}' for {} was not created",
                    request.name,
                    output::tag_style().apply_to(&range.range)
                ));
            }
            println!("{}", request.body);
        }
    }
}

/// Tag to release: the pushed tag, else the requested one, else the newest
fn select_tag(pushed: Option<&str>, requested: Option<&str>, newest: &str) -> String {
    pushed.or(requested).unwrap_or(newest).to_string()
}
