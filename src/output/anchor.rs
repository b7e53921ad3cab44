//! Anchor ids for section links

use std::sync::LazyLock;

use regex::Regex;

/// Any run of characters that may not appear in an anchor. Dashes and path
/// separators are included so repeated separators collapse to one dash.
static NON_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("NON_ANCHOR regex is invalid"));

/// Derive the anchor id for a relative path.
///
/// The table of contents and the section body both call this, so for the same
/// path they always agree.
///
/// # Examples
///
/// ```
/// use stitch::output::path_to_anchor;
///
/// assert_eq!(path_to_anchor("Src/My File.JS"), "src-my-file-js");
/// assert_eq!(path_to_anchor("a//b--c"), "a-b-c");
/// ```
pub fn path_to_anchor(path: &str) -> String {
    let lowered = path.to_lowercase();
    NON_ANCHOR
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
