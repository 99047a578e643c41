//! tagrel - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use git2::Repository;
use tracing_subscriber::EnvFilter;

use tagrel::changelog;
use tagrel::git::{messages_between, previous_tag, repo_info, resolve_tag};
use tagrel::github::{ReleaseParams, get_github_token, publish_release};

/// Publish grouped release notes for a tag from conventional commits.
#[derive(Parser, Debug)]
#[command(name = "tagrel")]
#[command(about = "Publish grouped release notes for a tag from conventional commits")]
#[command(version)]
struct Cli {
    /// Tag to produce the notes for. "@" means the latest tag.
    #[arg(short, long, default_value = "@")]
    tag: String,

    /// Only print the notes, do not publish a release
    #[arg(short, long)]
    print: bool,

    /// Remote to resolve the owner/repo from
    #[arg(short, long, default_value = "origin")]
    remote: String,

    /// Repository directory to operate on
    #[arg(long, default_value = ".")]
    dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Fail on missing auth before touching the repository, even in print mode.
    let token = get_github_token().context("GitHub authentication required")?;

    let repo = Repository::open(&cli.dir)
        .with_context(|| format!("Not a git repository: {}", cli.dir.display()))?;

    let tag = resolve_tag(&repo, &cli.tag)
        .with_context(|| format!("Failed to resolve tag '{}'", cli.tag))?;

    let from = previous_tag(&repo, &tag).context("Failed to resolve previous tag")?;

    let messages = messages_between(&repo, from.as_ref().map(|t| t.oid), tag.oid)
        .context("Failed to collect commit messages")?;

    let notes = changelog::generate(&messages);

    if notes.is_empty() {
        println!(
            "No changes between {} and {}. Nothing to release.",
            from.as_ref().map_or("root", |t| t.name.as_str()),
            tag.name
        );
        return Ok(());
    }

    if cli.print {
        println!("{notes}");
        return Ok(());
    }

    let (owner, repo_name) = repo_info(&repo, &cli.remote)
        .with_context(|| format!("Failed to resolve owner/repo from remote '{}'", cli.remote))?;

    let params = ReleaseParams::for_tag(&tag.name, &notes);
    let release = publish_release(&token, &owner, &repo_name, &params)
        .await
        .with_context(|| format!("Failed to publish release for '{}'", tag.name))?;

    println!("✓ Published release {}: {}", tag.name, release.html_url);

    Ok(())
}
