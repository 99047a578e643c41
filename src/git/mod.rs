//! Git operations using git2-rs.

pub mod commits;
pub mod remote;
pub mod tags;

pub use commits::messages_between;
pub use remote::{parse_remote_url, repo_info};
pub use tags::{TagInfo, latest_tag, previous_tag, resolve_tag};
