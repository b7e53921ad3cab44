//! Document output
//!
//! Sections are rendered individually by the content processor and joined by
//! [`assemble`] into the final Markdown document.

mod anchor;
mod config;
mod markdown;

pub use anchor::path_to_anchor;
pub use config::DocumentHeader;
pub use markdown::{SectionBody, assemble, render_section, write_document};

/// One rendered file in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub relative_path: String,
    pub rendered_text: String,
}
