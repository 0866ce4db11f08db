//! Locating and reading group literals.
//!
//! The pattern is deliberately narrow: after `<group>:` only whitespace,
//! brackets, ASCII letters, single quotes and commas may appear before the
//! closing `]`. Anything else (comments, double quotes, variables) stops the
//! match, and such a fragment is left to the user.

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

use regex::Regex;

use crate::Result;

/// A group literal found in configuration text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLiteral {
    /// The group key, e.g. `components`.
    pub group: String,
    /// Quoted names in source order.
    pub items: Vec<String>,
    /// Byte offset where `<group>:` starts.
    pub start: usize,
    /// Byte offset just past the closing `]`.
    pub end: usize,
}

/// Regex for a single quoted element.
static ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^']*)'").expect("Invalid item regex"));

/// Compiled group patterns, keyed by group name.
static GROUP_PATTERNS: LazyLock<RwLock<HashMap<String, Regex>>> = LazyLock::new(Default::default);

/// Build the pattern matching `<group>: [ ... ]`.
///
/// # Example
/// ```
/// use qauto_blocks::group_pattern;
///
/// let re = group_pattern("plugins").unwrap();
/// assert!(re.is_match("plugins: [ 'Notify' ]"));
/// assert!(!re.is_match("plugins: [ \"Notify\" ]"));
/// ```
pub fn group_pattern(group: &str) -> Result<Regex> {
    if let Some(re) = GROUP_PATTERNS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(group)
    {
        return Ok(re.clone());
    }

    let pattern = format!(r"{}:[\s\[\]a-zA-Z',]*\]", regex::escape(group));
    let re = Regex::new(&pattern)?;
    GROUP_PATTERNS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(group.to_string(), re.clone());
    Ok(re)
}

/// Extract the quoted names from a literal's text.
///
/// Empty quotes are dropped.
pub fn parse_items(literal: &str) -> Vec<String> {
    ITEM_REGEX
        .captures_iter(literal)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Find the first literal for `group` in `text`.
///
/// # Example
/// ```
/// use qauto_blocks::find_group;
///
/// let text = "framework: {\n  components: [ 'QBtn', 'QCard' ],\n}";
/// let literal = find_group(text, "components").unwrap().unwrap();
/// assert_eq!(literal.items, vec!["QBtn", "QCard"]);
/// ```
pub fn find_group(text: &str, group: &str) -> Result<Option<GroupLiteral>> {
    let re = group_pattern(group)?;
    Ok(re.find(text).map(|m| literal(group, m)))
}

/// Find every literal for `group` in `text`, in file order.
pub fn find_groups(text: &str, group: &str) -> Result<Vec<GroupLiteral>> {
    let re = group_pattern(group)?;
    Ok(re.find_iter(text).map(|m| literal(group, m)).collect())
}

fn literal(group: &str, m: regex::Match<'_>) -> GroupLiteral {
    GroupLiteral {
        group: group.to_string(),
        items: parse_items(&m.as_str()[group.len() + 1..]),
        start: m.start(),
        end: m.end(),
    }
}

/// Whether `text` holds a literal for `group`.
pub fn has_group(text: &str, group: &str) -> bool {
    matches!(find_group(text, group), Ok(Some(_)))
}
