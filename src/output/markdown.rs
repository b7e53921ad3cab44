//! Markdown rendering of sections and the assembled document
//!
//! Layout of the assembled document, in fixed order:
//!
//! 1. optional `SYSTEM: ...` preamble block
//! 2. title block with generation metadata
//! 3. table of contents, one link per section
//! 4. section bodies, in the same order as the table of contents

use std::io;
use std::path::Path;

use super::Section;
use super::anchor::path_to_anchor;
use super::config::DocumentHeader;

/// Characters that carry inline meaning in Markdown.
const MARKDOWN_PUNCTUATION: &[char] = &['\\', '`', '*', '_', '[', ']', '<', '>', '#', '|', '~', '!'];

/// Backslash-escape Markdown punctuation so a path renders literally in
/// headings and link text.
fn escape_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_PUNCTUATION.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Body of a section: fenced file content or a placeholder line.
#[derive(Debug, Clone, Copy)]
pub enum SectionBody<'a> {
    Content {
        text: &'a str,
        language: &'a str,
        truncated: bool,
    },
    Placeholder(&'a str),
}

/// Render one file's section.
pub fn render_section(relative_path: &str, metadata: Option<&str>, body: SectionBody<'_>) -> String {
    let mut out = String::new();
    out.push_str("<a id=\"");
    out.push_str(&path_to_anchor(relative_path));
    out.push_str("\"></a>\n\n## ");
    out.push_str(&escape_inline(relative_path));
    out.push_str("\n\n");

    if let Some(meta) = metadata {
        out.push_str("> **Metadata**\n>\n");
        for line in meta.lines() {
            out.push('>');
            if !line.is_empty() {
                out.push(' ');
                out.push_str(line);
            }
            out.push('\n');
        }
        out.push('\n');
    }

    match body {
        SectionBody::Content {
            text,
            language,
            truncated,
        } => {
            out.push_str("```");
            out.push_str(language);
            out.push('\n');
            out.push_str(text);
            if truncated {
                out.push_str(crate::file_utils::TRUNCATION_MARKER);
            }
            if !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("```\n");
        }
        SectionBody::Placeholder(note) => {
            out.push_str("*[");
            out.push_str(note);
            out.push_str("]*\n");
        }
    }
    out
}

/// Assemble the final document.
///
/// `sections` must already be in output order; the table of contents follows
/// it exactly.
pub fn assemble(preamble: Option<&str>, sections: &[Section], header: &DocumentHeader) -> String {
    let mut out = String::new();

    if let Some(text) = preamble {
        out.push_str("SYSTEM: ");
        out.push_str(text);
        out.push_str("\n\n");
    }

    out.push_str(&format!("# {}\n\n", header.title));
    out.push_str(&format!("- Generated: {}\n", header.timestamp()));
    out.push_str(&format!("- Files: {}\n", sections.len()));
    if header.placeholders > 0 {
        out.push_str(&format!("- Without content: {}\n", header.placeholders));
    }
    out.push('\n');

    out.push_str("## Table of Contents\n\n");
    if sections.is_empty() {
        out.push_str("*No files matched.*\n");
    }
    for section in sections {
        out.push_str(&format!(
            "- [{}](#{})\n",
            escape_inline(&section.relative_path),
            path_to_anchor(&section.relative_path)
        ));
    }

    for section in sections {
        out.push_str("\n---\n\n");
        out.push_str(&section.rendered_text);
    }
    out
}

/// Write the document to `path`, or to stdout when `path` is `None`.
pub fn write_document(document: &str, path: Option<&Path>) -> io::Result<()> {
    match path {
        Some(p) => std::fs::write(p, document),
        None => {
            use std::io::Write;
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()
        }
    }
}
