//! GitHub authentication detection.
//!
//! Token lookup order:
//! 1. `gh auth token` (gh CLI)
//! 2. GITHUB_TOKEN env var
//! 3. GH_TOKEN env var
//!
//! Lookup runs before any repository work so a missing token fails fast.

use std::env;
use std::process::Command;

use crate::error::GitHubError;

/// Get a GitHub token using the configured auth strategy.
pub fn get_github_token() -> Result<String, GitHubError> {
    if let Some(token) = get_token_from_gh_cli() {
        return Ok(token);
    }

    for var in ["GITHUB_TOKEN", "GH_TOKEN"] {
        if let Ok(token) = env::var(var) {
            if !token.is_empty() {
                return Ok(token);
            }
        }
    }

    Err(GitHubError::AuthenticationFailed)
}

/// Try to get a token from the gh CLI.
fn get_token_from_gh_cli() -> Option<String> {
    let status = Command::new("gh").args(["auth", "status"]).output().ok()?;

    if !status.status.success() {
        return None;
    }

    let output = Command::new("gh").args(["auth", "token"]).output().ok()?;

    if output.status.success() {
        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !token.is_empty() {
            return Some(token);
        }
    }

    None
}
