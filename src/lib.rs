//! tagrel - A CLI tool that publishes grouped release notes for a tag.
//!
//! # Overview
//!
//! tagrel reads the commit messages between a tag and the tag before it,
//! classifies each message by its conventional-commit verb, renders a grouped
//! Markdown changelog, and publishes it as a GitHub release for that tag.

pub mod changelog;
pub mod error;
pub mod git;
pub mod github;

// Re-export commonly used types
pub use changelog::{ChangelogEntry, NormalizedMessage, Section};
pub use error::{GitError, GitHubError};
pub use git::TagInfo;
pub use github::{CreatedRelease, ReleaseParams};
