//! Commit message collection between two revisions.

use git2::{Oid, Repository};

use crate::error::GitError;

/// Collect full commit messages for `from..to`, newest first.
///
/// `from` is excluded, matching `git log from..to`. When `from` is `None` the
/// walk runs all the way down to the repository root (first release).
pub fn messages_between(
    repo: &Repository,
    from: Option<Oid>,
    to: Oid,
) -> Result<Vec<String>, GitError> {
    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;

    revwalk.push(to).map_err(GitError::RevwalkError)?;
    if let Some(from_oid) = from {
        revwalk.hide(from_oid).map_err(GitError::RevwalkError)?;
    }

    let mut messages = Vec::new();

    for oid_result in revwalk {
        let oid = oid_result.map_err(GitError::RevwalkError)?;
        let commit = repo.find_commit(oid).map_err(GitError::ParseCommit)?;
        messages.push(commit.message().unwrap_or("").to_string());
    }

    Ok(messages)
}
