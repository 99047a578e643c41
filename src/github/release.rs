//! Release creation via octocrab.

use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GitHubError;

/// Request body for the create-release endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseParams {
    pub tag_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<String>,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

impl ReleaseParams {
    /// A published (non-draft, non-prerelease) release named after its tag.
    pub fn for_tag(tag: &str, body: &str) -> Self {
        Self {
            tag_name: tag.to_string(),
            target_commitish: None,
            name: tag.to_string(),
            body: body.to_string(),
            draft: false,
            prerelease: false,
        }
    }
}

/// The subset of the create-release response we care about.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedRelease {
    pub id: u64,
    pub html_url: String,
}

/// Publish a release using a personal token.
///
/// This is the main entry point that constructs the octocrab client.
pub async fn publish_release(
    token: &str,
    owner: &str,
    repo: &str,
    params: &ReleaseParams,
) -> Result<CreatedRelease, GitHubError> {
    let octocrab = Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(|e| GitHubError::ClientBuild(Box::new(e)))?;

    publish_release_with_client(&octocrab, owner, repo, params).await
}

/// Publish a release using a pre-configured octocrab client.
///
/// This allows dependency injection for testing with mock servers.
pub async fn publish_release_with_client(
    client: &Octocrab,
    owner: &str,
    repo: &str,
    params: &ReleaseParams,
) -> Result<CreatedRelease, GitHubError> {
    let route = format!("/repos/{owner}/{repo}/releases");
    debug!(route = %route, tag = %params.tag_name, "Publishing release");

    let release: CreatedRelease = client
        .post(route, Some(params))
        .await
        .map_err(|e| map_publish_error(e, &params.tag_name))?;

    Ok(release)
}

/// GitHub answers 422 when a release for the tag already exists. That case is
/// surfaced as its own variant so idempotent re-runs can be told apart from
/// genuine failures.
fn map_publish_error(e: octocrab::Error, tag: &str) -> GitHubError {
    if let octocrab::Error::GitHub { source, .. } = &e {
        if source.status_code.as_u16() == 422 {
            return GitHubError::ReleaseExists(tag.to_string());
        }
    }
    GitHubError::PublishRelease(Box::new(e))
}
