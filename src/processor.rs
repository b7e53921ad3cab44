//! Per-file content processing
//!
//! Turns each [`FileDescriptor`] into a rendered [`Section`]. Processing never
//! fails: binary files and unreadable files become placeholder sections and
//! are reported as [`ProcessedFile::Degraded`].

use std::fmt;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::file_utils::{
    MAX_CONTENT_CHARS, escape_fences, is_binary_extension, read_sidecar, read_text, truncate_chars,
};
use crate::language::fence_tag;
use crate::output::{Section, SectionBody, render_section};
use crate::rules::{Ruleset, extension_of};
use crate::tree::FileDescriptor;

/// Why a file was rendered without its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Degradation {
    /// Extension is in the binary table; the file was not read.
    Binary { extension: String },
    /// Reading or decoding the file failed.
    Unreadable { reason: String },
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degradation::Binary { extension } => write!(f, "binary file omitted: .{}", extension),
            Degradation::Unreadable { reason } => write!(f, "content unavailable: {}", reason),
        }
    }
}

/// Result of processing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessedFile {
    Ok(Section),
    Degraded(Section, Degradation),
}

impl ProcessedFile {
    pub fn section(&self) -> &Section {
        match self {
            ProcessedFile::Ok(s) | ProcessedFile::Degraded(s, _) => s,
        }
    }

    pub fn into_section(self) -> Section {
        match self {
            ProcessedFile::Ok(s) | ProcessedFile::Degraded(s, _) => s,
        }
    }

    pub fn degradation(&self) -> Option<&Degradation> {
        match self {
            ProcessedFile::Ok(_) => None,
            ProcessedFile::Degraded(_, d) => Some(d),
        }
    }
}

/// Process one file into a section.
pub fn process(descriptor: &FileDescriptor, ruleset: &Ruleset) -> ProcessedFile {
    let path = &descriptor.relative_path;
    let ext = extension_of(descriptor.file_name());

    if is_binary_extension(&ext) {
        debug!(path = %path, "binary extension, not reading");
        return degraded(path, Degradation::Binary { extension: ext });
    }

    let content = match read_text(&descriptor.absolute_path) {
        Ok(c) => c,
        Err(reason) => {
            warn!(path = %path, reason = %reason, "cannot read file, using placeholder");
            return degraded(path, Degradation::Unreadable { reason });
        }
    };

    let metadata = read_sidecar(&descriptor.absolute_path, ruleset.metadata_suffix());
    let escaped = escape_fences(&content);
    let (text, truncated) = truncate_chars(&escaped, MAX_CONTENT_CHARS);
    if truncated {
        debug!(path = %path, "content truncated");
    }

    let rendered = render_section(
        path,
        metadata.as_deref(),
        SectionBody::Content {
            text,
            language: fence_tag(&ext),
            truncated,
        },
    );
    ProcessedFile::Ok(Section {
        relative_path: path.clone(),
        rendered_text: rendered,
    })
}

fn degraded(path: &str, reason: Degradation) -> ProcessedFile {
    let note = reason.to_string();
    let section = Section {
        relative_path: path.to_string(),
        rendered_text: render_section(path, None, SectionBody::Placeholder(&note)),
    };
    ProcessedFile::Degraded(section, reason)
}

/// Process every file, preserving input order in the result.
///
/// `jobs` selects the worker count: 0 = rayon's global pool (all cores),
/// 1 = sequential, N = a dedicated pool of N threads.
pub fn process_all(files: &[FileDescriptor], ruleset: &Ruleset, jobs: usize) -> Vec<ProcessedFile> {
    match jobs {
        1 => files.iter().map(|f| process(f, ruleset)).collect(),
        0 => files.par_iter().map(|f| process(f, ruleset)).collect(),
        n => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
            Ok(pool) => pool.install(|| files.par_iter().map(|f| process(f, ruleset)).collect()),
            Err(e) => {
                // Fall back to rayon's global pool if custom pool creation fails
                warn!(jobs = n, error = %e, "cannot build worker pool, using default");
                files.par_iter().map(|f| process(f, ruleset)).collect()
            }
        },
    }
}
