//! Tag expression parsing
//!
//! A tag expression is a sequence of tokens. A `+` prefix marks a tag as
//! mandatory, a `-` prefix marks it as excluded, and anything else is
//! discretionary. Prefixes are stripped before storage and are never part
//! of the tag value itself.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Unordered collection of distinct tag strings.
pub type TagSet = BTreeSet<String>;

/// Regex for mandatory tags: `+` followed by at least one character
fn mandatory_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\+(.+)$").unwrap())
}

/// Regex for excluded tags: `-` followed by at least one character
fn excluded_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^-(.+)$").unwrap())
}

/// The three categories a tag expression classifies into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagExpression {
    pub mandatory: TagSet,
    pub discretionary: TagSet,
    pub excluded: TagSet,
}

impl TagExpression {
    /// Classify a sequence of tokens, one at a time, with no cross-token
    /// interaction.
    ///
    /// A bare `"+"` or `"-"` has an empty suffix, fails both prefix
    /// patterns (the capture requires at least one character) and is
    /// stored literally as a discretionary tag. Empty tokens are dropped;
    /// classification is total and never fails.
    pub fn classify<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut expr = TagExpression::default();

        for token in tokens {
            let token = token.as_ref();
            if let Some(caps) = mandatory_regex().captures(token) {
                expr.mandatory.insert(caps[1].to_string());
            } else if let Some(caps) = excluded_regex().captures(token) {
                expr.excluded.insert(caps[1].to_string());
            } else if !token.is_empty() {
                expr.discretionary.insert(token.to_string());
            }
        }

        expr
    }

    /// Tags this expression adds: mandatory and discretionary, minus
    /// excluded. Exclusion wins over both add categories.
    pub fn additions(&self) -> TagSet {
        self.mandatory
            .union(&self.discretionary)
            .filter(|tag| !self.excluded.contains(*tag))
            .cloned()
            .collect()
    }

    /// Tags this expression removes: every excluded tag, whether or not it
    /// was ever present.
    pub fn removals(&self) -> &TagSet {
        &self.excluded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tags: &[&str]) -> TagSet {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_classify_partitions_tokens() {
        let expr = TagExpression::classify(["red", "+blue", "-green", "yellow"]);
        assert_eq!(expr.mandatory, set(&["blue"]));
        assert_eq!(expr.discretionary, set(&["red", "yellow"]));
        assert_eq!(expr.excluded, set(&["green"]));
    }

    #[test]
    fn test_prefix_is_stripped() {
        let expr = TagExpression::classify(["+work"]);
        assert!(expr.mandatory.contains("work"));
        assert!(!expr.mandatory.contains("+work"));
    }

    #[test]
    fn test_bare_prefix_is_literal_discretionary() {
        let expr = TagExpression::classify(["+", "-"]);
        assert!(expr.mandatory.is_empty());
        assert!(expr.excluded.is_empty());
        assert_eq!(expr.discretionary, set(&["+", "-"]));
    }

    #[test]
    fn test_double_prefix_strips_one() {
        let expr = TagExpression::classify(["++urgent", "--old"]);
        assert_eq!(expr.mandatory, set(&["+urgent"]));
        assert_eq!(expr.excluded, set(&["-old"]));
    }

    #[test]
    fn test_empty_input_yields_empty_sets() {
        let expr = TagExpression::classify(Vec::<String>::new());
        assert_eq!(expr, TagExpression::default());
    }

    #[test]
    fn test_empty_tokens_are_dropped() {
        let expr = TagExpression::classify(["", "a"]);
        assert_eq!(expr.discretionary, set(&["a"]));
    }

    #[test]
    fn test_duplicate_tokens_deduplicated() {
        let expr = TagExpression::classify(["a", "a", "+b", "+b"]);
        assert_eq!(expr.discretionary, set(&["a"]));
        assert_eq!(expr.mandatory, set(&["b"]));
    }

    #[test]
    fn test_additions_exclusion_wins() {
        let expr = TagExpression::classify(["+keep", "drop", "-drop", "-gone"]);
        assert_eq!(expr.additions(), set(&["keep"]));
        assert_eq!(expr.removals(), &set(&["drop", "gone"]));
    }

    #[test]
    fn test_tags_are_case_and_whitespace_sensitive() {
        let expr = TagExpression::classify(["Work", "work", " work"]);
        assert_eq!(expr.discretionary, set(&["Work", "work", " work"]));
    }
}
