//! GitHub API operations using octocrab.

pub mod auth;
pub mod release;

pub use auth::get_github_token;
pub use release::{CreatedRelease, ReleaseParams, publish_release, publish_release_with_client};
