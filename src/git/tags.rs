//! Tag enumeration and tag-to-tag range resolution.

use std::collections::HashMap;

use git2::Repository;
use semver::Version;
use tracing::{debug, warn};

use crate::error::GitError;

/// A git tag with its resolved commit and optional semver version.
#[derive(Debug, Clone)]
pub struct TagInfo {
    pub name: String,
    pub oid: git2::Oid,
    pub version: Option<Version>,
}

/// Get all tags from the repository.
///
/// Annotated tags are peeled to the commit they point at.
pub fn get_all_tags(repo: &Repository) -> Result<Vec<TagInfo>, GitError> {
    let mut tags = Vec::new();

    repo.tag_foreach(|oid, name_bytes| {
        if let Ok(name_str) = std::str::from_utf8(name_bytes) {
            let name = name_str
                .strip_prefix("refs/tags/")
                .unwrap_or(name_str)
                .to_string();

            let version = get_version_from_tag(&name);

            let resolved_oid = match repo.find_tag(oid) {
                Ok(tag_obj) => tag_obj.target_id(),
                Err(e) => {
                    debug!(
                        tag = %name,
                        error = %e,
                        "Could not resolve annotated tag, using raw OID. \
                         This is normal for lightweight tags."
                    );
                    oid
                }
            };

            tags.push(TagInfo {
                name,
                oid: resolved_oid,
                version,
            });
        } else {
            warn!("Skipping tag with OID {} - name is not valid UTF-8", oid);
        }
        true
    })
    .map_err(GitError::TagIteration)?;

    Ok(tags)
}

/// Extract a semver version from a tag name.
/// Handles both "v1.2.3" and "1.2.3" formats.
pub fn get_version_from_tag(tag_name: &str) -> Option<Version> {
    let version_str = tag_name.strip_prefix('v').unwrap_or(tag_name);
    Version::parse(version_str).ok()
}

/// Index tags by the commit they point at.
fn tags_by_commit(repo: &Repository) -> Result<HashMap<git2::Oid, Vec<TagInfo>>, GitError> {
    let mut by_commit: HashMap<git2::Oid, Vec<TagInfo>> = HashMap::new();
    for tag in get_all_tags(repo)? {
        by_commit.entry(tag.oid).or_default().push(tag);
    }
    Ok(by_commit)
}

/// Pick one tag when a commit carries several: highest semver wins, then
/// lexicographic name for non-semver tags.
fn best_tag(candidates: &[TagInfo]) -> Option<TagInfo> {
    candidates
        .iter()
        .max_by(|a, b| match a.version.cmp(&b.version) {
            std::cmp::Ordering::Equal => a.name.cmp(&b.name),
            other => other,
        })
        .cloned()
}

/// Get the tag on the nearest tagged commit reachable from HEAD.
///
/// This is what `--tag @` means: the latest tag on the current branch, the
/// equivalent of `git describe --tags --abbrev=0`.
pub fn latest_tag(repo: &Repository) -> Result<TagInfo, GitError> {
    let head_oid = repo
        .head()
        .map_err(|e| GitError::ReferenceNotFound("HEAD".to_string(), e))?
        .target()
        .ok_or(GitError::NoTags)?;

    let by_commit = tags_by_commit(repo)?;
    if by_commit.is_empty() {
        return Err(GitError::NoTags);
    }

    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;
    revwalk.push(head_oid).map_err(GitError::RevwalkError)?;
    revwalk
        .set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)
        .map_err(GitError::RevwalkError)?;

    for oid in revwalk {
        let oid = oid.map_err(GitError::RevwalkError)?;
        if let Some(candidates) = by_commit.get(&oid) {
            if let Some(tag) = best_tag(candidates) {
                debug!(tag = %tag.name, "Found latest reachable tag");
                return Ok(tag);
            }
        }
    }

    Err(GitError::NoTags)
}

/// Resolve a tag reference from the CLI: `@` means the latest reachable tag,
/// anything else must name an existing tag.
pub fn resolve_tag(repo: &Repository, spec: &str) -> Result<TagInfo, GitError> {
    if spec == "@" {
        return latest_tag(repo);
    }

    get_all_tags(repo)?
        .into_iter()
        .find(|tag| tag.name == spec)
        .ok_or_else(|| {
            GitError::ReferenceNotFound(spec.to_string(), git2::Error::from_str("tag not found"))
        })
}

/// Get the tag on the nearest tagged commit strictly before the given tag,
/// the equivalent of `git describe --tags --abbrev=0 <tag>^`.
///
/// Returns `None` when no earlier tag exists; the caller then treats the
/// repository root as the start of the range.
pub fn previous_tag(repo: &Repository, tag: &TagInfo) -> Result<Option<TagInfo>, GitError> {
    let commit = repo.find_commit(tag.oid).map_err(GitError::ParseCommit)?;

    let by_commit = tags_by_commit(repo)?;

    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;
    for parent in commit.parent_ids() {
        revwalk.push(parent).map_err(GitError::RevwalkError)?;
    }
    revwalk
        .set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)
        .map_err(GitError::RevwalkError)?;

    for oid in revwalk {
        let oid = oid.map_err(GitError::RevwalkError)?;
        if let Some(candidates) = by_commit.get(&oid) {
            if let Some(found) = best_tag(candidates) {
                debug!(tag = %found.name, of = %tag.name, "Found previous tag");
                return Ok(Some(found));
            }
        }
    }

    debug!(of = %tag.name, "No previous tag, range starts at repository root");
    Ok(None)
}
