//! Conventional commit classification.
//!
//! Parses one normalized line into `(section, scope, description, breaking)`
//! using the grammar:
//!
//! ```text
//! <verb>[!] [ "(" <scope> ")" ] [!] [":"] <description>
//! ```
//!
//! Classification is total: a line with no recognizable verb degrades to the
//! [`Section::Misc`] bucket with the raw line as its description.

use std::sync::OnceLock;

use regex_lite::Regex;

use super::normalize::NormalizedMessage;

/// Canonical changelog sections, keyed by conventional commit verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Refactor,
    Feature,
    Fix,
    Chore,
    Enhancements,
    Upgrades,
    Ci,
    Style,
    Docs,
    Misc,
}

impl Section {
    /// Get the display name for the section header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Refactor => "Refactor",
            Self::Feature => "Feature",
            Self::Fix => "Fix",
            Self::Chore => "Chore",
            Self::Enhancements => "Enhancements",
            Self::Upgrades => "Upgrades",
            Self::Ci => "CI",
            Self::Style => "Style",
            Self::Docs => "Docs",
            Self::Misc => "Misc",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ref" | "refactor" => Ok(Self::Refactor),
            "feat" | "feature" => Ok(Self::Feature),
            "fix" | "fixed" => Ok(Self::Fix),
            "chore" => Ok(Self::Chore),
            "enhance" | "enhancement" | "enhancements" => Ok(Self::Enhancements),
            "upgrade" => Ok(Self::Upgrades),
            "ci" => Ok(Self::Ci),
            "style" => Ok(Self::Style),
            "docs" => Ok(Self::Docs),
            _ => Err(format!("Unknown verb: {}", s)),
        }
    }
}

/// A single classified changelog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub section: Section,
    /// Optional scope; may contain comma-separated sub-scopes. Empty means no
    /// scope.
    pub scope: String,
    pub description: String,
    pub breaking: bool,
}

fn grammar_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*([A-Za-z]+!?)(?:\(([A-Za-z,_-]+)\))?(!)?:?(.*)$").unwrap()
    })
}

/// Classify one normalized message.
///
/// Breaking is set by a `!` attached to the verb, a `!` after the scope, or a
/// breaking footer already detected by the normalizer. The three signals are
/// independent.
pub fn classify(message: &NormalizedMessage) -> ChangelogEntry {
    let line = message.line.as_str();

    let Some(caps) = grammar_re().captures(line) else {
        return ChangelogEntry {
            section: Section::Misc,
            scope: String::new(),
            description: line.trim().to_string(),
            breaking: message.breaking,
        };
    };

    let verb_token = caps.get(1).map_or("", |m| m.as_str());
    let scope = caps.get(2).map_or("", |m| m.as_str()).to_string();
    let scope_mark = caps.get(3).is_some();

    let (verb, verb_mark) = match verb_token.strip_suffix('!') {
        Some(stripped) => (stripped, true),
        None => (verb_token, false),
    };

    let section = verb.parse().unwrap_or(Section::Misc);

    let description = caps.get(4).map_or("", |m| m.as_str());
    let description = if description.is_empty() {
        line
    } else {
        description
    };

    ChangelogEntry {
        section,
        scope,
        description: description.trim().to_string(),
        breaking: verb_mark || scope_mark || message.breaking,
    }
}

/// Classify a sequence of normalized messages, preserving order.
pub fn classify_all(messages: &[NormalizedMessage]) -> Vec<ChangelogEntry> {
    messages.iter().map(classify).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(s: &str) -> NormalizedMessage {
        NormalizedMessage {
            line: s.to_string(),
            breaking: false,
        }
    }

    fn entry(section: Section, scope: &str, description: &str, breaking: bool) -> ChangelogEntry {
        ChangelogEntry {
            section,
            scope: scope.to_string(),
            description: description.to_string(),
            breaking,
        }
    }

    #[test]
    fn test_unrecognized_verb_falls_back_to_misc() {
        assert_eq!(
            classify(&line("something")),
            entry(Section::Misc, "", "something", false)
        );
        assert_eq!(
            classify(&line("Something")),
            entry(Section::Misc, "", "Something", false)
        );
    }

    #[test]
    fn test_verb_without_colon() {
        assert_eq!(
            classify(&line("fix something")),
            entry(Section::Fix, "", "something", false)
        );
    }

    #[test]
    fn test_verb_with_scope() {
        assert_eq!(
            classify(&line("Fix(repo) something")),
            entry(Section::Fix, "repo", "something", false)
        );
    }

    #[test]
    fn test_verb_with_scope_and_colon() {
        assert_eq!(
            classify(&line("Fix(repo): something")),
            entry(Section::Fix, "repo", "something", false)
        );
    }

    #[test]
    fn test_all_verb_aliases() {
        let cases = [
            ("ref", Section::Refactor),
            ("refactor", Section::Refactor),
            ("feat", Section::Feature),
            ("feature", Section::Feature),
            ("fix", Section::Fix),
            ("fixed", Section::Fix),
            ("chore", Section::Chore),
            ("enhance", Section::Enhancements),
            ("enhancement", Section::Enhancements),
            ("enhancements", Section::Enhancements),
            ("upgrade", Section::Upgrades),
            ("ci", Section::Ci),
            ("style", Section::Style),
            ("docs", Section::Docs),
        ];
        for (verb, want) in cases {
            let got = classify(&line(&format!("{verb} something")));
            assert_eq!(got.section, want, "verb {verb}");
            assert_eq!(got.description, "something", "verb {verb}");
        }
    }

    #[test]
    fn test_aliases_are_case_insensitive() {
        assert_eq!(classify(&line("FEAT: x")).section, Section::Feature);
        assert_eq!(classify(&line("Fixed: x")).section, Section::Fix);
        assert_eq!(classify(&line("DOCS: x")).section, Section::Docs);
    }

    #[test]
    fn test_comma_and_hyphen_scopes() {
        assert_eq!(
            classify(&line("fix(git,commit): something")),
            entry(Section::Fix, "git,commit", "something", false)
        );
        assert_eq!(
            classify(&line("fix(git-commit): something")),
            entry(Section::Fix, "git-commit", "something", false)
        );
    }

    #[test]
    fn test_breaking_verb_mark() {
        let got = classify(&line("ref!(repo): this is a test"));
        assert_eq!(got.section, Section::Refactor);
        assert_eq!(got.scope, "repo");
        assert!(got.breaking);
    }

    #[test]
    fn test_breaking_scope_mark() {
        let got = classify(&line("feat(api)!: breaking api change"));
        assert_eq!(got.section, Section::Feature);
        assert_eq!(got.scope, "api");
        assert!(got.breaking);
    }

    #[test]
    fn test_breaking_footer_flag_carries_through() {
        let msg = NormalizedMessage {
            line: "ref(repo): this is a new api".to_string(),
            breaking: true,
        };
        let got = classify(&msg);
        assert!(got.breaking);
    }

    #[test]
    fn test_not_breaking_without_any_signal() {
        assert!(!classify(&line("feat(api): regular change")).breaking);
    }

    #[test]
    fn test_empty_description_falls_back_to_whole_line() {
        let got = classify(&line("fix(repo)"));
        assert_eq!(got.section, Section::Fix);
        assert_eq!(got.description, "fix(repo)");
    }

    #[test]
    fn test_scope_requires_balanced_parentheses() {
        // A scope only counts inside "(...)"; stray hyphenated tokens after
        // the verb stay part of the description.
        let got = classify(&line("fix-repo: x"));
        assert_eq!(got.section, Section::Fix);
        assert_eq!(got.scope, "");
        assert_eq!(got.description, "-repo: x");
    }

    #[test]
    fn test_no_alpha_verb_degrades_to_misc() {
        let got = classify(&line("1234 numbers only"));
        assert_eq!(got.section, Section::Misc);
        assert_eq!(got.description, "1234 numbers only");
    }

    #[test]
    fn test_pseudo_multiline_description_kept_verbatim() {
        let got = classify(&line(r"fix something\n\nmore detail"));
        assert_eq!(got.section, Section::Fix);
        assert_eq!(got.description, r"something\n\nmore detail");
    }
}
