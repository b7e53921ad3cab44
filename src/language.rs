//! Fenced code block language tags
//!
//! Maps a lowercase file extension to the info string used on the opening
//! fence of a section, so renderers can highlight the content.

/// Tag used when a file has no extension or an extension that cannot be
/// placed on a fence line.
pub const FALLBACK_TAG: &str = "text";

/// Language tag for a lowercase extension (without the leading dot).
///
/// Well-known extensions map to the names highlighters expect; anything else
/// is used as-is when it only contains `[a-z0-9+#._-]`. Empty extensions and
/// extensions with other characters fall back to [`FALLBACK_TAG`].
///
/// # Examples
///
/// ```
/// use stitch::language::fence_tag;
///
/// assert_eq!(fence_tag("rs"), "rust");
/// assert_eq!(fence_tag("tsx"), "tsx");
/// assert_eq!(fence_tag("zig"), "zig");
/// assert_eq!(fence_tag(""), "text");
/// assert_eq!(fence_tag("x`y"), "text");
/// ```
pub fn fence_tag(ext: &str) -> &str {
    match ext {
        "" => FALLBACK_TAG,
        "rs" => "rust",
        "py" | "pyw" | "pyi" => "python",
        "js" | "mjs" | "cjs" => "javascript",
        "ts" | "mts" | "cts" => "typescript",
        "rb" => "ruby",
        "kt" | "kts" => "kotlin",
        "cs" => "csharp",
        "h" => "c",
        "cc" | "cxx" | "hpp" | "hxx" | "hh" => "cpp",
        "sh" | "bash" | "zsh" => "bash",
        "ps1" => "powershell",
        "yml" => "yaml",
        "md" | "markdown" => "markdown",
        "htm" => "html",
        "txt" => FALLBACK_TAG,
        other if other.chars().all(is_tag_char) => other,
        _ => FALLBACK_TAG,
    }
}

fn is_tag_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '#' | '.' | '_' | '-')
}
