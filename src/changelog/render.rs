//! Grouping and Markdown rendering of classified entries.
//!
//! Entries are bucketed per section in first-appearance order of each
//! section, which keeps the output deterministic for a given input sequence.

use std::sync::OnceLock;

use regex_lite::Regex;

use super::classify::{ChangelogEntry, Section};

/// The markdown prefix before each rendered entry.
pub const ITEM_PREFIX: &str = "- ";

/// The annotation appended to breaking entries.
pub const BREAKING_MARKER: &str = "[**BREAKING CHANGE**]";

/// Descriptions carry pseudo line breaks as a literal two character escape,
/// not a real newline. Footer content folded in by test fixtures and issue
/// reference lines use this convention.
const PSEUDO_NEWLINE: &str = r"\n";

fn refs_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z]+\s+#\d+").unwrap())
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Render the `**Scope:** ` prefix for a non-empty scope.
///
/// Comma-separated sub-scopes are capitalized individually; hyphenated tokens
/// are left whole. A scope of `ci` (any case) renders as the literal `CI`.
fn scope_prefix(scope: &str) -> String {
    if scope.is_empty() {
        return String::new();
    }

    let scope = if scope.eq_ignore_ascii_case("ci") {
        "CI".to_string()
    } else {
        scope
            .split(',')
            .map(upper_first)
            .collect::<Vec<_>>()
            .join(",")
    };

    format!("**{scope}:** ")
}

/// Render one classified entry as a single bulleted line.
pub fn render_entry(entry: &ChangelogEntry) -> String {
    let mut lines = entry.description.split(PSEUDO_NEWLINE);
    let title = lines.next().unwrap_or("");
    let title = upper_first(title.strip_prefix(' ').unwrap_or(title));

    let mut refs = Vec::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }
        for m in refs_re().find_iter(line) {
            refs.push(m.as_str().to_string());
        }
    }

    let mut rendered = format!("{}{}{}", ITEM_PREFIX, scope_prefix(&entry.scope), title);
    if !refs.is_empty() {
        rendered.push_str(&format!(" ({})", refs.join(", ")));
    }
    if entry.breaking {
        rendered.push_str(&format!(" {BREAKING_MARKER}"));
    }
    rendered
}

/// Group entries by section, preserving arrival order within each group.
///
/// Groups appear in first-appearance order of their section. The section
/// count is bounded by the [`Section`] enum, so a linear scan is fine.
pub fn group_entries(entries: Vec<ChangelogEntry>) -> Vec<(Section, Vec<ChangelogEntry>)> {
    let mut groups: Vec<(Section, Vec<ChangelogEntry>)> = Vec::new();

    for entry in entries {
        match groups.iter().position(|(section, _)| *section == entry.section) {
            Some(i) => groups[i].1.push(entry),
            None => groups.push((entry.section, vec![entry])),
        }
    }

    groups
}

/// Serialize grouped entries to the final changelog text.
///
/// Each section is a `### <Section>` header, a blank line, and one line per
/// entry. Sections are separated by two blank lines. The result carries no
/// trailing newline.
pub fn render_groups(groups: &[(Section, Vec<ChangelogEntry>)]) -> String {
    let blocks: Vec<String> = groups
        .iter()
        .map(|(section, entries)| {
            let lines: Vec<String> = entries.iter().map(render_entry).collect();
            format!("### {}\n\n{}", section, lines.join("\n"))
        })
        .collect();

    blocks.join("\n\n\n")
}

/// Group and render in one step.
pub fn render_changelog(entries: Vec<ChangelogEntry>) -> String {
    render_groups(&group_entries(entries))
}
