//! The changelog pipeline: normalize, classify, group, render.
//!
//! The whole pipeline is a pure, synchronous transformation over an in-memory
//! list of raw commit messages. It never fails; unparseable input degrades to
//! the `Misc` section and empty messages are dropped.

pub mod classify;
pub mod normalize;
pub mod render;

pub use classify::{ChangelogEntry, Section, classify, classify_all};
pub use normalize::{NormalizedMessage, normalize_all, normalize_message};
pub use render::{group_entries, render_changelog, render_entry, render_groups};

/// Run the full pipeline over raw multi-line commit messages.
pub fn generate<I, S>(raw_messages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    render_changelog(classify_all(&normalize_all(raw_messages)))
}
