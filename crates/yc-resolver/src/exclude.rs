//! Exclusion filter
//!
//! Decides whether a component should be left to other resolvers. An
//! exclusion is a literal name, a regular expression, or any mix of the two.

use crate::error::ConfigError;
use regex::Regex;
use serde::Deserialize;

/// Exclusion rule
#[derive(Debug, Clone)]
pub enum Exclude {
    /// Exact, case-sensitive name
    Name(String),

    /// Regular expression, matched anywhere in the name
    Pattern(Regex),

    /// Matches if any member matches
    Any(Vec<Exclude>),
}

impl Exclude {
    /// Literal exclusion
    pub fn name(name: impl Into<String>) -> Self {
        Exclude::Name(name.into())
    }

    /// Compile a pattern exclusion
    pub fn pattern(pattern: &str) -> Result<Self, ConfigError> {
        Regex::new(pattern)
            .map(Exclude::Pattern)
            .map_err(|error| ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                error,
            })
    }

    /// Check whether `name` is excluded
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Exclude::Name(literal) => literal == name,
            Exclude::Pattern(regex) => regex.is_match(name),
            Exclude::Any(items) => items.iter().any(|item| item.matches(name)),
        }
    }
}

impl From<&str> for Exclude {
    fn from(name: &str) -> Self {
        Exclude::Name(name.to_string())
    }
}

impl From<String> for Exclude {
    fn from(name: String) -> Self {
        Exclude::Name(name)
    }
}

impl From<Regex> for Exclude {
    fn from(regex: Regex) -> Self {
        Exclude::Pattern(regex)
    }
}

impl From<Vec<Exclude>> for Exclude {
    fn from(items: Vec<Exclude>) -> Self {
        Exclude::Any(items)
    }
}

/// Check whether `name` is excluded by an optional rule
///
/// An absent rule excludes nothing.
pub fn is_excluded(name: &str, exclude: Option<&Exclude>) -> bool {
    exclude.is_some_and(|exclude| exclude.matches(name))
}

/// Exclusion as written in an options file
///
/// ```toml
/// exclude = ["Button", { pattern = "^Icon" }]
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub(crate) enum RawExclude {
    Name(String),
    Pattern { pattern: String },
    Any(Vec<RawExclude>),
}

impl RawExclude {
    /// Compile every pattern, failing on the first invalid one
    pub(crate) fn compile(self) -> Result<Exclude, ConfigError> {
        match self {
            RawExclude::Name(name) => Ok(Exclude::Name(name)),
            RawExclude::Pattern { pattern } => Exclude::pattern(&pattern),
            RawExclude::Any(items) => items
                .into_iter()
                .map(RawExclude::compile)
                .collect::<Result<Vec<_>, _>>()
                .map(Exclude::Any),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_excludes_nothing() {
        assert!(!is_excluded("Button", None));
    }

    #[test]
    fn test_literal_is_exact() {
        let exclude = Exclude::name("Button");
        assert!(exclude.matches("Button"));
        assert!(!exclude.matches("ButtonGroup"));
        assert!(!exclude.matches("button"));
    }

    #[test]
    fn test_pattern_is_unanchored() {
        let exclude = Exclude::pattern("Group").unwrap();
        assert!(exclude.matches("ButtonGroup"));
        assert!(exclude.matches("CheckboxGroup"));
        assert!(!exclude.matches("Checkbox"));
    }

    #[test]
    fn test_collection_is_disjunctive() {
        let exclude = Exclude::from(vec![
            Exclude::name("Button"),
            Exclude::pattern("^Icon").unwrap(),
        ]);
        assert!(is_excluded("Button", Some(&exclude)));
        assert!(is_excluded("IconHome", Some(&exclude)));
        assert!(!is_excluded("Input", Some(&exclude)));
    }

    #[test]
    fn test_empty_collection() {
        let exclude = Exclude::Any(vec![]);
        assert!(!exclude.matches("Button"));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = Exclude::pattern("(unclosed");
        assert!(matches!(result, Err(ConfigError::InvalidPattern { .. })));
    }

    #[test]
    fn test_compile_nested() {
        let raw = RawExclude::Any(vec![
            RawExclude::Name("Modal".to_string()),
            RawExclude::Any(vec![RawExclude::Pattern {
                pattern: "^Typography".to_string(),
            }]),
        ]);
        let exclude = raw.compile().unwrap();
        assert!(exclude.matches("Modal"));
        assert!(exclude.matches("TypographyText"));
        assert!(!exclude.matches("Drawer"));
    }
}
