//! Owner/repo extraction from a configured remote.

use git2::Repository;

use crate::error::{GitError, GitHubError};

/// Read the URL of the named remote and extract `(owner, repo)` from it.
pub fn repo_info(repo: &Repository, remote_name: &str) -> Result<(String, String), GitError> {
    let remote = repo
        .find_remote(remote_name)
        .map_err(|e| GitError::RemoteNotFound(remote_name.to_string(), e))?;

    let url = remote
        .url()
        .ok_or_else(|| GitError::RemoteMissingUrl(remote_name.to_string()))?;

    parse_remote_url(url).map_err(|_| GitError::InvalidRemoteUrl(url.to_string()))
}

/// Extract owner and repo from a git remote URL.
pub fn parse_remote_url(url: &str) -> Result<(String, String), GitHubError> {
    // Handle SSH format: git@github.com:owner/repo.git
    if url.starts_with("git@github.com:") {
        let path = url
            .strip_prefix("git@github.com:")
            .ok_or(GitHubError::InvalidRepositoryUrl)?;
        return parse_owner_repo_path(path);
    }

    // Handle HTTPS format: https://github.com/owner/repo.git
    if url.contains("github.com/") {
        let path = url
            .split("github.com/")
            .nth(1)
            .ok_or(GitHubError::InvalidRepositoryUrl)?;
        return parse_owner_repo_path(path);
    }

    Err(GitHubError::InvalidRepositoryUrl)
}

fn parse_owner_repo_path(path: &str) -> Result<(String, String), GitHubError> {
    let path = path.strip_suffix(".git").unwrap_or(path);
    let parts: Vec<&str> = path.split('/').collect();

    if parts.len() >= 2 {
        Ok((parts[0].to_string(), parts[1].to_string()))
    } else {
        Err(GitHubError::InvalidRepositoryUrl)
    }
}
