//! Compiled `package-list` entries

use regex::Regex;

/// Characters a `*` stands for in a `package-list` entry
const WILDCARD_CLASS: &str = "[a-zA-Z0-9_-]+";

/// A compiled predicate over a package's pretty name
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Entry without `*`, compared for string equality
    Exact(String),
    /// Entry with `*`, searched anywhere in the name
    Wildcard { pattern: String, regex: Regex },
    /// Entry whose wildcard expansion is not a valid regex; never matches
    Invalid(String),
}

impl Matcher {
    /// Compile a single `package-list` entry
    pub fn compile(entry: &str) -> Self {
        if !entry.contains('*') {
            return Matcher::Exact(entry.to_string());
        }

        // Unanchored: `acme/*` also matches `other/acme/foo`
        let expanded = entry.replace('*', WILDCARD_CLASS);
        match Regex::new(&expanded) {
            Ok(regex) => Matcher::Wildcard {
                pattern: entry.to_string(),
                regex,
            },
            Err(e) => {
                tracing::warn!(entry, error = %e, "package-list entry never matches");
                Matcher::Invalid(entry.to_string())
            }
        }
    }

    /// Test a pretty name against this matcher
    pub fn matches(&self, pretty_name: &str) -> bool {
        match self {
            Matcher::Exact(name) => name == pretty_name,
            Matcher::Wildcard { regex, .. } => regex.is_match(pretty_name),
            Matcher::Invalid(_) => false,
        }
    }

    /// The configured entry this matcher was compiled from
    pub fn pattern(&self) -> &str {
        match self {
            Matcher::Exact(name) => name,
            Matcher::Wildcard { pattern, .. } => pattern,
            Matcher::Invalid(entry) => entry,
        }
    }
}
