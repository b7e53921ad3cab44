//! File reading and content shaping helpers for the content processor
//!
//! Everything here is side-effect free apart from reading files, and reports
//! failures as values rather than errors.

use std::fs;
use std::path::{Path, PathBuf};

/// Maximum number of characters of file content rendered into a section.
pub const MAX_CONTENT_CHARS: usize = 200_000;

/// Marker appended after content cut at [`MAX_CONTENT_CHARS`].
pub const TRUNCATION_MARKER: &str = "\n\n[... truncated: content exceeds 200000 characters ...]";

/// Replacement for a literal triple backtick inside content.
pub const ESCAPED_FENCE: &str = "\\`\\`\\`";

/// Extensions treated as binary without reading the file.
const BINARY_EXTENSIONS: &[&str] = &[
    // images
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "tif", "tiff", "psd", "heic", "avif",
    // archives
    "zip", "tar", "gz", "tgz", "bz2", "xz", "7z", "rar", "zst", "jar", "war", "whl",
    // audio / video
    "mp3", "wav", "ogg", "flac", "aac", "m4a", "mp4", "m4v", "avi", "mov", "mkv", "webm",
    // compiled objects
    "exe", "dll", "so", "dylib", "o", "a", "lib", "obj", "class", "pyc", "pyo", "wasm", "bin",
    // fonts
    "ttf", "otf", "woff", "woff2", "eot",
    // documents and databases
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "sqlite", "sqlite3", "db",
];

/// Check whether a lowercase extension is in the binary table.
pub fn is_binary_extension(ext: &str) -> bool {
    BINARY_EXTENSIONS.contains(&ext)
}

/// Read a file as UTF-8 text, describing the failure on error.
pub fn read_text(path: &Path) -> Result<String, String> {
    let bytes = fs::read(path).map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| format!("not valid UTF-8 text ({})", e.utf8_error()))
}

/// Location of the sidecar metadata file for `path`: the file name with
/// `suffix` appended, in the same directory.
pub fn sidecar_path(path: &Path, suffix: &str) -> Option<PathBuf> {
    if suffix.is_empty() {
        return None;
    }
    let mut name = path.file_name()?.to_os_string();
    name.push(suffix);
    Some(path.with_file_name(name))
}

/// Read and trim the sidecar metadata for `path`, if there is any.
pub fn read_sidecar(path: &Path, suffix: &str) -> Option<String> {
    let sidecar = sidecar_path(path, suffix)?;
    let content = fs::read_to_string(&sidecar).ok()?;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Neutralize triple backticks so content cannot close its fence.
pub fn escape_fences(content: &str) -> String {
    content.replace("```", ESCAPED_FENCE)
}

/// Cut `content` to at most `max_chars` characters.
///
/// Returns the kept prefix and whether anything was dropped. The cut never
/// splits a UTF-8 sequence.
pub fn truncate_chars(content: &str, max_chars: usize) -> (&str, bool) {
    match content.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (&content[..byte_idx], true),
        None => (content, false),
    }
}
