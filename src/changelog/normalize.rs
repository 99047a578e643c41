//! Commit message normalization.
//!
//! Collapses a raw multi-line commit message into one line the classifier can
//! work with. Body and footer lines carrying issue references are folded into
//! the title in parentheses; a `BREAKING CHANGE` footer is surfaced as a flag
//! instead of text so the renderer emits the marker exactly once.

/// The footer token that marks a backward-incompatible change.
pub const BREAKING_TOKEN: &str = "BREAKING CHANGE";

/// A commit message reduced to a single classifiable line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedMessage {
    /// Title line with reference-bearing footer lines folded in.
    pub line: String,
    /// True when a body or footer line contained [`BREAKING_TOKEN`].
    pub breaking: bool,
}

/// Normalize one raw commit message.
///
/// Returns `None` when the title is empty after trimming; such messages are
/// dropped from the pipeline entirely.
pub fn normalize_message(raw: &str) -> Option<NormalizedMessage> {
    let mut lines = raw.split('\n');
    let title = lines.next().unwrap_or("");

    if title.trim().is_empty() {
        return None;
    }

    let mut line = title.strip_prefix(' ').unwrap_or(title).to_string();
    let mut breaking = false;

    for rest in lines {
        if rest.contains(BREAKING_TOKEN) {
            breaking = true;
        }
        if rest.contains('#') {
            line.push_str(&format!(" ({rest})"));
        }
    }

    Some(NormalizedMessage { line, breaking })
}

/// Normalize an ordered sequence of raw messages, discarding empties.
///
/// The output preserves input order and may be shorter than the input.
pub fn normalize_all<I, S>(raw_messages: I) -> Vec<NormalizedMessage>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw_messages
        .into_iter()
        .filter_map(|msg| normalize_message(msg.as_ref()))
        .collect()
}
