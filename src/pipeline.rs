//! One complete run: preamble, walk, process, assemble, write.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::RunOptions;
use crate::error::{Error, Result};
use crate::output::{DocumentHeader, Section, assemble, write_document};
use crate::processor::{Degradation, process_all};
use crate::rules::Ruleset;
use crate::tree::{FileDescriptor, Walker, find_preamble, load_preamble};

/// What a run produced.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of sections in the document.
    pub files: usize,
    /// Files rendered as placeholders, in document order.
    pub degraded: Vec<(String, Degradation)>,
    /// Relative path of the preamble used, if any.
    pub preamble: Option<String>,
    pub output: Option<PathBuf>,
}

/// An assembled document, not yet written anywhere.
#[derive(Debug, Clone)]
pub struct Document {
    pub text: String,
    pub summary: RunSummary,
}

/// Check the scan root and return its canonical form.
pub fn resolve_root(root: &Path) -> Result<PathBuf> {
    let canonical = fs::canonicalize(root).map_err(|source| Error::RootAccess {
        path: root.to_path_buf(),
        source,
    })?;
    if !canonical.is_dir() {
        return Err(Error::RootNotDirectory(root.to_path_buf()));
    }
    Ok(canonical)
}

/// Ruleset for the main walk: the configured rules, plus the output file
/// when it lies under the root so a re-run never includes its own output.
fn walk_ruleset(options: &RunOptions, root: &Path) -> Result<Ruleset> {
    let ruleset = options.config.ruleset()?;
    let Some(output) = options.output.as_deref() else {
        return Ok(ruleset);
    };
    Ok(match output_relative_to(root, output) {
        Some(rel) => ruleset.with_ignored_path(&rel),
        None => ruleset,
    })
}

fn output_relative_to(root: &Path, output: &Path) -> Option<String> {
    let absolute = if output.is_absolute() {
        output.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(output)
    };
    // The output may not exist yet; canonicalize its parent instead.
    let parent = fs::canonicalize(absolute.parent()?).ok()?;
    let full = parent.join(absolute.file_name()?);
    let rel = full.strip_prefix(root).ok()?;
    Some(
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
    )
}

/// List the files a run would include, in document order.
pub fn list_files(options: &RunOptions) -> Result<Vec<FileDescriptor>> {
    let root = resolve_root(&options.root)?;
    let mut ruleset = walk_ruleset(options, &root)?;
    if options.config.preamble {
        if let Some(candidate) = find_preamble(&root, &ruleset) {
            ruleset = ruleset.with_ignored_path(&candidate.relative_path);
        }
    }
    Ok(Walker::new(&ruleset).walk(&root))
}

/// Build the document in memory.
pub fn build_document(options: &RunOptions) -> Result<Document> {
    let root = resolve_root(&options.root)?;
    let mut ruleset = walk_ruleset(options, &root)?;

    let mut preamble_path = None;
    let mut preamble_text = None;
    if options.config.preamble {
        if let Some(candidate) = find_preamble(&root, &ruleset) {
            // Excluded from the walk even if it cannot be read.
            ruleset = ruleset.with_ignored_path(&candidate.relative_path);
            preamble_text = load_preamble(&candidate);
            if preamble_text.is_some() {
                preamble_path = Some(candidate.relative_path);
            }
        }
    }

    let files = Walker::new(&ruleset).walk(&root);
    info!(root = %root.display(), files = files.len(), "collected files");

    let processed = process_all(&files, &ruleset, options.config.jobs);

    let mut degraded = Vec::new();
    let mut sections: Vec<Section> = Vec::with_capacity(processed.len());
    for file in processed {
        if let Some(reason) = file.degradation() {
            degraded.push((file.section().relative_path.clone(), reason.clone()));
        }
        sections.push(file.into_section());
    }

    let title = root
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    let header = DocumentHeader::new(title).with_placeholders(degraded.len());
    let text = assemble(preamble_text.as_deref(), &sections, &header);

    Ok(Document {
        text,
        summary: RunSummary {
            files: sections.len(),
            degraded,
            preamble: preamble_path,
            output: options.output.clone(),
        },
    })
}

/// Build the document and write it to the configured destination.
pub fn run(options: &RunOptions) -> Result<RunSummary> {
    let document = build_document(options)?;

    write_document(&document.text, options.output.as_deref()).map_err(|source| {
        Error::WriteOutput {
            path: options
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from("<stdout>")),
            source,
        }
    })?;

    info!(
        files = document.summary.files,
        placeholders = document.summary.degraded.len(),
        "document written"
    );
    Ok(document.summary)
}
