//! Error types for tagrel modules using thiserror.

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to find reference '{0}': {1}")]
    ReferenceNotFound(String, #[source] git2::Error),

    #[error("No tags found in repository")]
    NoTags,

    #[error("Failed to iterate tags: {0}")]
    TagIteration(#[source] git2::Error),

    #[error("Failed to parse commit: {0}")]
    ParseCommit(#[source] git2::Error),

    #[error("Failed to walk commit history: {0}")]
    RevwalkError(#[source] git2::Error),

    #[error("Remote '{0}' not found: {1}")]
    RemoteNotFound(String, #[source] git2::Error),

    #[error("Remote '{0}' has no URL")]
    RemoteMissingUrl(String),

    #[error("Could not extract owner/repo from remote URL '{0}'")]
    InvalidRemoteUrl(String),
}

/// Errors from GitHub API operations.
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error(
        "GitHub authentication failed: no valid auth found. Run 'gh auth login' or set GITHUB_TOKEN environment variable"
    )]
    AuthenticationFailed,

    #[error("Failed to build GitHub client: {0}")]
    ClientBuild(#[source] Box<octocrab::Error>),

    #[error("Release for tag '{0}' already exists")]
    ReleaseExists(String),

    #[error("Failed to publish release: {0}")]
    PublishRelease(#[source] Box<octocrab::Error>),

    #[error("Failed to parse repository URL")]
    InvalidRepositoryUrl,
}
