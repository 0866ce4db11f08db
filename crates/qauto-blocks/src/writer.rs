//! Rendering and substituting group literals.

use crate::error::{Error, Result};
use crate::parser::group_pattern;

/// Indentation of each element line.
const ITEM_INDENT: &str = "        ";

/// Indentation of the closing bracket line.
const CLOSE_INDENT: &str = "      ";

/// Render a group literal in the configuration file's convention.
///
/// One single-quoted element per line, eight spaces in, closing bracket six
/// spaces in. An empty list renders inline.
///
/// # Example
/// ```
/// use qauto_blocks::render_group;
///
/// assert_eq!(
///     render_group("plugins", &["Dialog", "Notify"]),
///     "plugins: [\n        'Dialog',\n        'Notify'\n      ]"
/// );
/// assert_eq!(render_group("plugins", &[] as &[&str]), "plugins: []");
/// ```
pub fn render_group<S: AsRef<str>>(group: &str, items: &[S]) -> String {
    if items.is_empty() {
        return format!("{group}: []");
    }

    let lines: Vec<String> = items
        .iter()
        .map(|item| format!("{ITEM_INDENT}'{}'", item.as_ref()))
        .collect();
    format!("{group}: [\n{}\n{CLOSE_INDENT}]", lines.join(",\n"))
}

/// Replace every literal for `group` in `text` with `items`.
///
/// Text outside the matched spans is returned unchanged.
///
/// # Errors
/// Returns `Error::GroupPatternNotFound` if `text` has no literal for `group`.
///
/// # Example
/// ```
/// use qauto_blocks::replace_group;
///
/// let text = "framework: { directives: [ 'Ripple' ], iconSet: 'mdi' }";
/// let patched = replace_group(text, "directives", &["ClosePopup", "Ripple"]).unwrap();
/// assert!(patched.starts_with("framework: { directives: [\n"));
/// assert!(patched.ends_with("      ], iconSet: 'mdi' }"));
/// ```
pub fn replace_group<S: AsRef<str>>(text: &str, group: &str, items: &[S]) -> Result<String> {
    let re = group_pattern(group)?;
    if !re.is_match(text) {
        return Err(Error::GroupPatternNotFound {
            group: group.to_string(),
        });
    }

    let rendered = render_group(group, items);
    let patched = re.replace_all(text, regex::NoExpand(&rendered));
    tracing::trace!(group, items = items.len(), "group literal replaced");
    Ok(patched.into_owned())
}
