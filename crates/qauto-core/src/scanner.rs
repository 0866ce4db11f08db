//! Usage detection over raw source text
//!
//! Source files are not parsed. An item counts as used when its dash-cased
//! markup form appears followed by a tag boundary, or, for injectable
//! services, when its name or `$q.<name>` accessor appears anywhere.

use indexmap::IndexMap;
use qauto_meta::{ItemDescriptor, Whitelist};

/// Prefix that marks an item as reachable through the service object.
pub const SERVICE_PREFIX: &str = "$q.";

/// Convert a catalogue name to its markup form.
///
/// `QBtn` -> `q-btn`, `ClosePopup` -> `close-popup`, `XMLParser` -> `xml-parser`.
pub fn param_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        }

        out.extend(c.to_lowercase());
    }

    out.trim_end_matches('-').to_string()
}

/// Characters that may follow a markup form for it to count as a match.
fn is_boundary(c: char) -> bool {
    matches!(c, '>' | '.' | '=' | '/') || c.is_ascii_whitespace()
}

/// Whether `needle` occurs in `source` followed by a boundary character.
fn contains_bounded(source: &str, needle: &str) -> bool {
    source.match_indices(needle).any(|(idx, _)| {
        source[idx + needle.len()..]
            .chars()
            .next()
            .is_some_and(is_boundary)
    })
}

/// Precomputed match forms for one item.
#[derive(Debug, Clone)]
struct ScanEntry {
    name: String,
    surface: String,
    accessor: Option<String>,
}

impl ScanEntry {
    fn new(descriptor: &ItemDescriptor) -> Self {
        let accessor = descriptor
            .injection_method
            .contains(SERVICE_PREFIX)
            .then(|| format!("{SERVICE_PREFIX}{}", descriptor.name.to_lowercase()));
        Self {
            name: descriptor.name.clone(),
            surface: param_case(&descriptor.name),
            accessor,
        }
    }

    fn is_used_in(&self, source: &str) -> bool {
        if contains_bounded(source, &self.surface) {
            return true;
        }
        match &self.accessor {
            Some(accessor) => source.contains(&self.name) || source.contains(accessor),
            None => false,
        }
    }
}

/// Finds whitelisted items used in a block of source text.
///
/// Match forms are computed once from the whitelist; scanning is a pure
/// function of the group and the text.
#[derive(Debug, Clone, Default)]
pub struct UsageScanner {
    groups: IndexMap<String, Vec<ScanEntry>>,
}

impl UsageScanner {
    pub fn new(whitelist: &Whitelist) -> Self {
        let groups = whitelist
            .groups()
            .map(|group| {
                let entries = whitelist.items(group).iter().map(ScanEntry::new).collect();
                (group.to_string(), entries)
            })
            .collect();
        Self { groups }
    }

    /// Names of the items of `group` used in `source`, in whitelist order.
    ///
    /// Unknown groups and unmatched text yield an empty list.
    pub fn scan(&self, group: &str, source: &str) -> Vec<String> {
        let Some(entries) = self.groups.get(group) else {
            return Vec::new();
        };

        let mut found: Vec<String> = Vec::new();
        for entry in entries {
            if entry.is_used_in(source) && !found.contains(&entry.name) {
                found.push(entry.name.clone());
            }
        }
        found
    }

    /// Groups in whitelist order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}
